// SPDX-License-Identifier: MPL-2.0
//! The fixed catalog of notification variants shown by the gallery.
//!
//! The catalog is pure data: an ordered enumeration with a display label and
//! an auto-hide delay per variant. Ordinals are dense and match `ALL`
//! iteration order, so position and identity round-trip.

use std::time::Duration;

/// Auto-hide delay applied to the transient variants.
pub const AUTO_HIDE_DELAY: Duration = Duration::from_secs(2);

/// A notification style variant demonstrated by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    PrimaryToast,
    PrimaryToastWithImageAndTitle,
    NeutralToast,
    PrimaryOutlineBar,
    PrimaryBar,
    NeutralBar,
    PersistentBarWithAction,
    PersistentBarWithCancel,
    NeutralToastWithImageAndTitle,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: [Variant; 9] = [
        Variant::PrimaryToast,
        Variant::PrimaryToastWithImageAndTitle,
        Variant::NeutralToast,
        Variant::PrimaryOutlineBar,
        Variant::PrimaryBar,
        Variant::NeutralBar,
        Variant::PersistentBarWithAction,
        Variant::PersistentBarWithCancel,
        Variant::NeutralToastWithImageAndTitle,
    ];

    /// Stable ordinal of this variant, equal to its position in [`ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a variant up by ordinal.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Variant> {
        Self::ALL.get(index).copied()
    }

    /// Fluent key of the human-readable group label.
    #[must_use]
    pub fn display_label_key(self) -> &'static str {
        match self {
            Variant::PrimaryToast => "variant-primary-toast",
            Variant::PrimaryToastWithImageAndTitle => "variant-primary-toast-image-title",
            Variant::NeutralToast => "variant-neutral-toast",
            Variant::PrimaryBar => "variant-primary-bar",
            Variant::PrimaryOutlineBar => "variant-primary-outline-bar",
            Variant::NeutralBar => "variant-neutral-bar",
            Variant::PersistentBarWithAction => "variant-persistent-bar-action",
            Variant::PersistentBarWithCancel => "variant-persistent-bar-cancel",
            Variant::NeutralToastWithImageAndTitle => "variant-neutral-toast-custom-image",
        }
    }

    /// Auto-hide delay for this variant's instances.
    ///
    /// `None` marks a persistent variant: its instances stay on screen until
    /// explicitly dismissed.
    #[must_use]
    pub fn auto_hide_delay(self) -> Option<Duration> {
        match self {
            Variant::PrimaryToast
            | Variant::PrimaryBar
            | Variant::PrimaryOutlineBar
            | Variant::NeutralBar => Some(AUTO_HIDE_DELAY),
            Variant::PrimaryToastWithImageAndTitle
            | Variant::NeutralToast
            | Variant::PersistentBarWithAction
            | Variant::PersistentBarWithCancel
            | Variant::NeutralToastWithImageAndTitle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_dense_and_ordered() {
        for (position, variant) in Variant::ALL.iter().enumerate() {
            assert_eq!(variant.index(), position);
            assert_eq!(Variant::from_index(position), Some(*variant));
        }
    }

    #[test]
    fn out_of_range_index_yields_none() {
        assert_eq!(Variant::from_index(Variant::ALL.len()), None);
    }

    #[test]
    fn catalog_has_nine_variants() {
        assert_eq!(Variant::ALL.len(), 9);
    }

    #[test]
    fn display_label_keys_are_unique() {
        let mut keys: Vec<_> = Variant::ALL.iter().map(|v| v.display_label_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Variant::ALL.len());
    }

    #[test]
    fn transient_variants_hide_after_two_seconds() {
        for variant in [
            Variant::PrimaryToast,
            Variant::PrimaryBar,
            Variant::PrimaryOutlineBar,
            Variant::NeutralBar,
        ] {
            assert_eq!(variant.auto_hide_delay(), Some(Duration::from_secs(2)));
        }
    }

    #[test]
    fn remaining_variants_are_persistent() {
        for variant in [
            Variant::PrimaryToastWithImageAndTitle,
            Variant::NeutralToast,
            Variant::PersistentBarWithAction,
            Variant::PersistentBarWithCancel,
            Variant::NeutralToastWithImageAndTitle,
        ] {
            assert_eq!(variant.auto_hide_delay(), None);
        }
    }

    #[test]
    fn primary_outline_bar_sits_at_position_three() {
        assert_eq!(Variant::PrimaryOutlineBar.index(), 3);
    }
}
