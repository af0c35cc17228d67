// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only widget-instance state snapshots.

use kurbo::Vec2;

/// The side of an anchor a floating part is placed against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// To the right of the anchor.
    Right,
    /// Below the anchor.
    Bottom,
    /// To the left of the anchor.
    Left,
}

/// Alignment of a floating part along its placement side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush with the leading edge.
    Start,
    /// Centered on the anchor.
    #[default]
    Center,
    /// Flush with the trailing edge.
    End,
}

/// A snapshot of one widget instance's interaction state.
///
/// Snapshots are produced by the headless primitive and read by every
/// descendant through the scope stack. Presentation code never writes one:
/// state is mutated exclusively by the primitive in response to
/// trigger/dismiss events. A descendant never sees a torn value because a
/// snapshot is pushed whole before any descendant builds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WidgetState {
    /// Whether the instance is open. While the primitive defers unmount for
    /// an exit animation, the subtree still builds with `open == false`.
    pub open: bool,
    /// Placement side, when the primitive positions a floating part.
    pub side: Option<Side>,
    /// Placement alignment along the side.
    pub align: Option<Align>,
    /// Offset from the anchor, in logical pixels.
    pub offset: Vec2,
}

impl WidgetState {
    /// A closed instance with no placement metadata.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            open: false,
            side: None,
            align: None,
            offset: Vec2::ZERO,
        }
    }

    /// An open instance with no placement metadata.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            open: true,
            side: None,
            align: None,
            offset: Vec2::ZERO,
        }
    }

    /// Returns a copy with placement metadata attached.
    #[must_use]
    pub const fn placed(mut self, side: Side, align: Align, offset: Vec2) -> Self {
        self.side = Some(side);
        self.align = Some(align);
        self.offset = offset;
        self
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_toggle_open_only() {
        assert!(WidgetState::open().open);
        assert!(!WidgetState::closed().open);
        assert_eq!(WidgetState::open().side, None);
    }

    #[test]
    fn placed_attaches_metadata() {
        let state = WidgetState::open().placed(Side::Bottom, Align::Start, Vec2::new(0.0, 4.0));
        assert_eq!(state.side, Some(Side::Bottom));
        assert_eq!(state.align, Some(Align::Start));
        assert_eq!(state.offset.y, 4.0);
    }
}
