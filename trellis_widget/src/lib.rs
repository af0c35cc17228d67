// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Widget: styled, platform-correct compound widgets.
//!
//! A compound widget is a fixed topology of named sub-components wired over
//! a headless primitive: `Root` establishes the widget instance, `Trigger`
//! toggles it, and floating parts always nest `Portal` ⊃ `Overlay` ⊃
//! `Content`. Every sub-component resolves its own utility classes from
//! three sources — its structural baseline, the ambient interaction state,
//! and caller overrides — without the caller wiring any of that by hand.
//!
//! Two widget families are provided, both applying the same pattern:
//!
//! - [`alert_dialog`]: a modal confirm/dismiss dialog with `Action`/`Cancel`
//!   leaves that hand a derived text class to nested text.
//! - [`context_menu`]: a press-anchored menu with items, checkbox/radio
//!   items with a reserved indicator slot, and submenus whose triggers read
//!   their own submenu's state.
//!
//! Building yields an [`Element`] tree: a retained description carrying the
//! resolved class string, pass-through attributes, an opaque [`NodeRef`]
//! handle, optional portal target and frame, and the enter/exit
//! [`Transition`] keyed off the ambient `open` edge. The host integration
//! turns elements into real views; this layer never touches pixels.
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_platform::Platform;
//! use trellis_scope::WidgetState;
//! use trellis_widget::{alert_dialog, BuildCx, ElementKind, Props};
//!
//! let mut cx = BuildCx::new(Platform::Web, Size::new(800.0, 600.0));
//! let dialog = alert_dialog::root(&mut cx, &WidgetState::open(), |cx| {
//!     let title = alert_dialog::title(cx, Props::default(), "Are you absolutely sure?");
//!     let content = alert_dialog::content(cx, alert_dialog::ContentProps::default(), vec![title]);
//!     vec![content]
//! });
//!
//! // Content never renders without its enclosing Overlay and Portal.
//! let portal = dialog.find(ElementKind::Portal).unwrap();
//! assert!(portal.find(ElementKind::Overlay).is_some());
//! assert!(portal.find(ElementKind::Content).is_some());
//! ```
//!
//! ## Platform dispatch
//!
//! The overlay renderer differs per host platform: the native renderer
//! covers the viewport with an absolutely positioned layer and plays an
//! explicit fade, while the web renderer relies on stacking context and
//! class-driven transitions. The implementation is selected once when the
//! [`BuildCx`] is created; widget code never branches on platform.
//!
//! ## Failure semantics
//!
//! This layer has no runtime-failure states of its own. Building a
//! sub-component outside its required ancestor scope is a contract violation
//! of the headless primitive and fails fast through the scope stack.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod alert_dialog;
pub mod context_menu;
mod cx;
mod element;
mod overlay;
mod text;
mod transition;

pub use cx::BuildCx;
pub use element::{Attrs, Element, ElementKind, NodeRef, Props};
pub use overlay::OverlayProps;
pub use text::text;
pub use transition::Transition;
