// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/exit transitions keyed off the ambient `open` edge.

/// A fixed enter/exit presentation pair with a fixed duration.
///
/// Transitions are declared per sub-component and are not user-configurable
/// in this layer. They key off the ambient `open` transition edge, not off
/// mount/unmount: when `open` flips to false the headless primitive defers
/// unmount, the subtree builds once more carrying the exit tokens, and the
/// primitive removes it after [`Transition::duration_ms`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Token family applied while entering.
    pub enter: &'static str,
    /// Token family applied while exiting.
    pub exit: &'static str,
    /// Fixed duration in milliseconds.
    pub duration_ms: u16,
}

impl Transition {
    /// The overlay fade: backdrop layers fade in and out.
    pub const OVERLAY_FADE: Self = Self {
        enter: "fade-in-0 animate-in",
        exit: "fade-out-0 animate-out",
        duration_ms: 150,
    };

    /// Dialog content: fade plus a slight zoom from 95%.
    pub const CONTENT_ZOOM: Self = Self {
        enter: "fade-in-0 zoom-in-95 animate-in",
        exit: "fade-out-0 zoom-out-95 animate-out",
        duration_ms: 200,
    };

    /// Menu panels: the same zoom entry with a full zoom-out exit.
    pub const MENU_POP: Self = Self {
        enter: "fade-in-0 zoom-in-95 animate-in",
        exit: "fade-out-0 zoom-out animate-out",
        duration_ms: 150,
    };

    /// Returns the token family for the current edge.
    #[must_use]
    pub const fn classes(&self, open: bool) -> &'static str {
        if open { self.enter } else { self.exit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_the_open_edge() {
        assert_eq!(
            Transition::OVERLAY_FADE.classes(true),
            "fade-in-0 animate-in"
        );
        assert_eq!(
            Transition::OVERLAY_FADE.classes(false),
            "fade-out-0 animate-out"
        );
    }

    #[test]
    fn durations_are_short_fixed_constants() {
        for transition in [
            Transition::OVERLAY_FADE,
            Transition::CONTENT_ZOOM,
            Transition::MENU_POP,
        ] {
            assert!(
                (150..=200).contains(&transition.duration_ms),
                "durations stay in the 150-200ms band"
            );
        }
    }
}
