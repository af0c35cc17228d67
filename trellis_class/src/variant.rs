// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button variant and size axes.
//!
//! Actionable widget leaves (dialog Action/Cancel) resolve a named variant
//! plus a size axis to their structural tokens once, before ambient and
//! caller tokens are appended. The text classes are derived alongside so a
//! leaf can hand them to nested text without the text being told the variant
//! explicitly.

use crate::ClassList;

/// The intent axis of a button-like leaf.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled primary button. Dialog `Action` always uses this.
    #[default]
    Default,
    /// Destructive intent.
    Destructive,
    /// Bordered, background-free button. Dialog `Cancel` always uses this.
    Outline,
    /// Secondary emphasis.
    Secondary,
    /// No chrome until hovered/pressed.
    Ghost,
    /// Rendered like an inline link.
    Link,
}

/// The size axis of a button-like leaf.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Standard control height.
    #[default]
    Default,
    /// Compact height.
    Sm,
    /// Prominent height.
    Lg,
    /// Square icon button.
    Icon,
}

const BUTTON_BASE: &str =
    "group flex items-center justify-center rounded-md web:ring-offset-background \
     web:transition-colors web:focus-visible:outline-none web:focus-visible:ring-2 \
     web:focus-visible:ring-ring web:focus-visible:ring-offset-2";

const TEXT_BASE: &str = "web:whitespace-nowrap text-sm native:text-base font-medium \
     text-foreground web:transition-colors";

/// Resolves the container classes for a variant/size selection.
///
/// The result is the structural segment only; the caller appends ambient and
/// override tokens afterwards.
#[must_use]
pub fn button_classes<'a>(variant: ButtonVariant, size: ButtonSize) -> ClassList<'a> {
    let variant = match variant {
        ButtonVariant::Default => "bg-primary web:hover:opacity-90 active:opacity-90",
        ButtonVariant::Destructive => "bg-destructive web:hover:opacity-90 active:opacity-90",
        ButtonVariant::Outline => {
            "border border-input bg-background web:hover:bg-accent active:bg-accent"
        }
        ButtonVariant::Secondary => "bg-secondary web:hover:opacity-80 active:opacity-80",
        ButtonVariant::Ghost => "web:hover:bg-accent active:bg-accent",
        ButtonVariant::Link => "web:underline-offset-4 web:hover:underline web:focus:underline",
    };
    let size = match size {
        ButtonSize::Default => "h-10 px-4 py-2 native:h-12 native:px-5 native:py-3",
        ButtonSize::Sm => "h-9 rounded-md px-3",
        ButtonSize::Lg => "h-11 rounded-md px-8 native:h-14",
        ButtonSize::Icon => "h-10 w-10",
    };
    ClassList::new(BUTTON_BASE).and(variant).and(size)
}

/// Resolves the derived text classes for a variant/size selection.
///
/// Leaves push this onto the ambient text-class scope so nested text adopts
/// the correct contrast automatically.
#[must_use]
pub fn button_text_classes<'a>(variant: ButtonVariant, size: ButtonSize) -> ClassList<'a> {
    let variant = match variant {
        ButtonVariant::Default => "text-primary-foreground",
        ButtonVariant::Destructive => "text-destructive-foreground",
        ButtonVariant::Outline => "group-active:text-accent-foreground",
        ButtonVariant::Secondary => "text-secondary-foreground group-active:text-secondary-foreground",
        ButtonVariant::Ghost => "group-active:text-accent-foreground",
        ButtonVariant::Link => "text-primary group-active:underline",
    };
    let size = match size {
        ButtonSize::Default | ButtonSize::Icon => "",
        ButtonSize::Sm => "",
        ButtonSize::Lg => "native:text-lg",
    };
    ClassList::new(TEXT_BASE).and(variant).and(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_primary_filled() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default()).resolve();
        assert!(classes.contains("bg-primary"), "default must be filled");
        assert!(classes.contains("h-10"), "default size applies");
    }

    #[test]
    fn outline_variant_has_border_not_fill() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::default()).resolve();
        assert!(classes.contains("border-input"), "outline must carry a border");
        assert!(!classes.contains("bg-primary"), "outline must not be primary-filled");
    }

    #[test]
    fn text_classes_track_variant_contrast() {
        let action = button_text_classes(ButtonVariant::Default, ButtonSize::default()).resolve();
        let cancel = button_text_classes(ButtonVariant::Outline, ButtonSize::default()).resolve();
        assert!(action.contains("text-primary-foreground"), "filled text contrast");
        assert_ne!(action, cancel, "variants derive distinct text classes");
    }

    #[test]
    fn resolution_is_stable_per_selection() {
        let a = button_classes(ButtonVariant::Ghost, ButtonSize::Sm).resolve();
        let b = button_classes(ButtonVariant::Ghost, ButtonSize::Sm).resolve();
        assert_eq!(a, b);
    }
}
