// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for auto-hide deadlines.
///
/// Active only while something on screen can expire; persistent
/// notifications alone keep the application idle.
pub fn create_tick_subscription(can_expire: bool) -> Subscription<Message> {
    if can_expire {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
