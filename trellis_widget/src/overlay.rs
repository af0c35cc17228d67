// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-dispatched overlay rendering.
//!
//! The overlay sits between portal and content: it is the dismiss/backdrop
//! layer of every floating part. On web, stacking context and class-driven
//! transitions do the work and the overlay does not alter layout geometry.
//! On native there is no CSS engine, so the overlay pins itself over the
//! full viewport and wraps its children in a container playing an explicit
//! fade. Both implementations accept the same properties; which one runs is
//! decided once per [`BuildCx`](crate::BuildCx).

use alloc::vec;
use alloc::vec::Vec;
use trellis_class::ClassList;
use trellis_platform::{Platform, PlatformMap};

use crate::cx::BuildCx;
use crate::element::{Element, ElementKind};
use crate::transition::Transition;

/// Properties shared by both overlay implementations.
#[derive(Clone, Debug, Default)]
pub struct OverlayProps<'a> {
    /// The widget family's structural overlay tokens.
    pub base: &'a str,
    /// Caller class overrides, appended last.
    pub class: Option<&'a str>,
    /// The fade to play across the open edge, if this family's overlay is
    /// itself animated (a dialog backdrop is, a menu's dismiss layer is not).
    pub transition: Option<Transition>,
}

/// One overlay implementation. Both platform variants share this contract,
/// so assembly code and callers never branch on platform.
pub(crate) type OverlayBuild =
    for<'a> fn(&mut BuildCx, &OverlayProps<'a>, Vec<Element>) -> Element;

/// Selects the overlay implementation for `platform`, once, at context
/// construction.
///
/// # Panics
///
/// Panics if `platform` has no registered implementation.
pub(crate) fn select_overlay(platform: Platform) -> OverlayBuild {
    PlatformMap::new()
        .web(build_web as OverlayBuild)
        .native(build_native as OverlayBuild)
        .select(platform)
}

fn build_web(cx: &mut BuildCx, props: &OverlayProps<'_>, children: Vec<Element>) -> Element {
    let open = cx.scopes.root().open;
    let mut overlay = Element::new(ElementKind::Overlay, cx.alloc_node());
    overlay.class = ClassList::new(props.base)
        .maybe(props.transition.map(|t| t.classes(open)))
        .extend(props.class)
        .resolve();
    overlay.children = children;
    overlay
}

fn build_native(cx: &mut BuildCx, props: &OverlayProps<'_>, children: Vec<Element>) -> Element {
    // The open edge is consumed by the fill container's transition rather
    // than by class tokens; reading it here still asserts the root scope.
    let _ = cx.scopes.root().open;
    let mut overlay = Element::new(ElementKind::Overlay, cx.alloc_node());
    overlay.class = ClassList::new(props.base).extend(props.class).resolve();
    overlay.frame = Some(cx.viewport().to_rect());

    let mut fill = Element::new(ElementKind::View, cx.alloc_node());
    fill.transition = props.transition;
    fill.children = children;
    overlay.children = vec![fill];
    overlay
}
