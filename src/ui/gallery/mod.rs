// SPDX-License-Identifier: MPL-2.0
//! The demonstration screen listing every notification variant.
//!
//! The gallery reads the catalog once at startup to build one group per
//! variant: a label, a live inline preview of the configured widget, and a
//! "Show" trigger button. Each button's press message carries its variant,
//! bound at construction; there is no positional lookup.

pub mod catalog;
pub mod factory;
mod view;

pub use catalog::Variant;

use crate::ui::notifications::{Notification, NotificationMessage};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A trigger button bound to `Variant` was pressed.
    Show(Variant),
    /// An interaction on one of the inline preview widgets.
    Preview(NotificationMessage),
}

/// Gallery screen state.
///
/// Previews are built once from the catalog; trigger presses construct
/// fresh instances through the factory instead of reusing these.
#[derive(Debug)]
pub struct State {
    previews: Vec<Notification>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Builds the gallery groups from the variant catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previews: Variant::ALL.iter().map(|&v| factory::build(v)).collect(),
        }
    }

    /// The inline preview instances, in catalog order.
    #[must_use]
    pub fn previews(&self) -> &[Notification] {
        &self.previews
    }
}

pub use view::view;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_builds_one_preview_per_variant() {
        let state = State::new();
        assert_eq!(state.previews().len(), Variant::ALL.len());
    }

    #[test]
    fn previews_follow_catalog_order() {
        let state = State::new();
        for (preview, variant) in state.previews().iter().zip(Variant::ALL) {
            assert_eq!(preview.variant(), variant);
        }
    }

    #[test]
    fn trigger_binding_round_trips_with_position() {
        // Each group's trigger carries its variant explicitly; the catalog
        // invariant still guarantees position and identity agree.
        let state = State::new();
        for (position, preview) in state.previews().iter().enumerate() {
            let bound = preview.variant();
            assert_eq!(bound.index(), position);
            assert_eq!(Variant::from_index(position), Some(bound));
        }
    }
}
