// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is an interactive gallery of toast and bar notification
//! styles built with the Iced GUI framework.
//!
//! It enumerates the notification widget's style variants, renders a live
//! preview of each, and shows fresh transient instances on demand. It also
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod i18n;
pub mod image_handler;
pub mod ui;
