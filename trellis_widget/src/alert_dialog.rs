// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alert dialog family: a modal confirm/dismiss dialog.
//!
//! Topology: `root` establishes the widget instance; `content` always nests
//! itself inside `Portal` ⊃ `Overlay`, so a dialog panel can not render
//! without its backdrop and portal. `action` and `cancel` are the
//! confirm-and-dismiss / dismiss-only triggers; each pushes a derived text
//! class for its children. `cancel` always renders as the outline button
//! variant and `action` as the default variant — a fixed policy of this
//! family, not caller-configurable.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use trellis_class::variant::{ButtonSize, ButtonVariant, button_classes, button_text_classes};
use trellis_class::ClassList;
use trellis_scope::WidgetState;

use crate::cx::BuildCx;
use crate::element::{Element, ElementKind, Props};
use crate::overlay::OverlayProps;
use crate::transition::Transition;

const OVERLAY_BASE: &str =
    "absolute top-0 right-0 bottom-0 left-0 z-50 flex items-center justify-center bg-black/80 p-2";

const CONTENT_BASE: &str = "z-50 max-w-lg gap-4 rounded-lg border border-border bg-background \
     p-6 shadow-foreground/10 shadow-lg web:duration-200";

/// Properties for [`content`].
#[derive(Clone, Debug, Default)]
pub struct ContentProps<'a> {
    /// Caller class overrides for the content panel.
    pub class: Option<&'a str>,
    /// Caller class overrides for the overlay layer.
    pub overlay_class: Option<&'a str>,
    /// Mounts the portal at a named host instead of the default target.
    pub portal_host: Option<&'a str>,
}

/// Establishes one dialog instance.
///
/// `state` is the snapshot owned by the headless primitive; it is pushed as
/// the root scope around `children`, so every descendant reads this
/// instance's state and never a sibling's.
#[must_use]
pub fn root(
    cx: &mut BuildCx,
    state: &WidgetState,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let node = cx.alloc_node();
    let scope = cx.scopes.push_root(*state);
    let built = children(cx);
    cx.scopes.pop(scope);

    let mut element = Element::new(ElementKind::Root, node);
    element.children = built;
    element
}

/// Builds the trigger that opens the dialog on activation.
///
/// Activation handling belongs to the headless primitive; this wrapper only
/// contributes classes and pass-through attributes.
#[must_use]
pub fn trigger(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    let mut element = Element::new(ElementKind::Trigger, cx.alloc_node());
    element.class = ClassList::default().extend(props.class).resolve();
    element.attrs = props.attrs;
    element.children = children;
    element
}

/// Builds the dialog panel, wrapped in its overlay and portal.
///
/// The containment order Portal ⊃ Overlay ⊃ Content is fixed: the returned
/// element is the portal. Both overlay and content key their enter/exit
/// presentation off the ambient `open` edge.
///
/// # Panics
///
/// Panics if built outside a dialog [`root`] — an invalid tree shape,
/// surfaced as the primitive's contract violation.
#[must_use]
pub fn content(cx: &mut BuildCx, props: ContentProps<'_>, children: Vec<Element>) -> Element {
    let open = cx.scopes.root().open;

    let mut panel = Element::new(ElementKind::Content, cx.alloc_node());
    panel.class = ClassList::new(CONTENT_BASE)
        .and(Transition::CONTENT_ZOOM.classes(open))
        .extend(props.class)
        .resolve();
    panel.transition = Some(Transition::CONTENT_ZOOM);
    panel.children = children;

    let build_overlay = cx.overlay();
    let overlay = build_overlay(
        cx,
        &OverlayProps {
            base: OVERLAY_BASE,
            class: props.overlay_class,
            transition: Some(Transition::OVERLAY_FADE),
        },
        vec![panel],
    );

    let mut portal = Element::new(ElementKind::Portal, cx.alloc_node());
    portal.portal_host = props.portal_host.map(String::from);
    portal.children = vec![overlay];
    portal
}

/// Builds the header block above the dialog body.
#[must_use]
pub fn header(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    block(cx, ElementKind::Header, "flex flex-col gap-2", props, children)
}

/// Builds the footer block holding the action row.
#[must_use]
pub fn footer(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    block(
        cx,
        ElementKind::Footer,
        "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end",
        props,
        children,
    )
}

/// Builds the dialog title text.
#[must_use]
pub fn title(cx: &mut BuildCx, props: Props<'_>, content: &str) -> Element {
    let mut element = Element::new(ElementKind::Title, cx.alloc_node());
    element.class = ClassList::new("font-semibold native:text-xl text-foreground text-lg")
        .extend(props.class)
        .resolve();
    element.text = Some(content.into());
    element.attrs = props.attrs;
    element
}

/// Builds the dialog description text.
#[must_use]
pub fn description(cx: &mut BuildCx, props: Props<'_>, content: &str) -> Element {
    let mut element = Element::new(ElementKind::Description, cx.alloc_node());
    element.class = ClassList::new("native:text-base text-muted-foreground text-sm")
        .extend(props.class)
        .resolve();
    element.text = Some(content.into());
    element.attrs = props.attrs;
    element
}

/// Builds the confirm-and-dismiss trigger, always in the default variant.
#[must_use]
pub fn action(
    cx: &mut BuildCx,
    props: Props<'_>,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    button_leaf(cx, ElementKind::Action, ButtonVariant::Default, props, children)
}

/// Builds the dismiss-only trigger, always in the outline variant.
#[must_use]
pub fn cancel(
    cx: &mut BuildCx,
    props: Props<'_>,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    button_leaf(cx, ElementKind::Cancel, ButtonVariant::Outline, props, children)
}

fn block(
    cx: &mut BuildCx,
    kind: ElementKind,
    base: &str,
    props: Props<'_>,
    children: Vec<Element>,
) -> Element {
    let mut element = Element::new(kind, cx.alloc_node());
    element.class = ClassList::new(base).extend(props.class).resolve();
    element.attrs = props.attrs;
    element.children = children;
    element
}

fn button_leaf(
    cx: &mut BuildCx,
    kind: ElementKind,
    variant: ButtonVariant,
    props: Props<'_>,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let node = cx.alloc_node();
    let text_class = button_text_classes(variant, ButtonSize::Default)
        .extend(props.class)
        .resolve();
    let scope = cx.scopes.push_text_class(text_class);
    let built = children(cx);
    cx.scopes.pop(scope);

    let mut element = Element::new(kind, node);
    element.class = button_classes(variant, ButtonSize::Default)
        .extend(props.class)
        .resolve();
    element.attrs = props.attrs;
    element.children = built;
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::text;
    use kurbo::Size;
    use trellis_platform::Platform;

    fn cx(platform: Platform) -> BuildCx {
        BuildCx::new(platform, Size::new(800.0, 600.0))
    }

    fn full_dialog(cx: &mut BuildCx, state: WidgetState) -> Element {
        root(cx, &state, |cx| {
            let trigger = trigger(cx, Props::default(), Vec::new());
            if !cx.scopes.root().open {
                // The primitive mounts the floating parts only while open
                // (or while deferring unmount for the exit animation).
                return vec![trigger];
            }
            let head = vec![
                title(cx, Props::default(), "Discard draft?"),
                description(cx, Props::default(), "This cannot be undone."),
            ];
            let buttons = vec![
                cancel(cx, Props::default(), |cx| {
                    vec![text(cx, Props::default(), "Cancel")]
                }),
                action(cx, Props::default(), |cx| {
                    vec![text(cx, Props::default(), "Discard")]
                }),
            ];
            let body = vec![
                header(cx, Props::default(), head),
                footer(cx, Props::default(), buttons),
            ];
            vec![trigger, content(cx, ContentProps::default(), body)]
        })
    }

    #[test]
    fn closed_root_renders_trigger_only() {
        let mut cx = cx(Platform::Web);
        let dialog = full_dialog(&mut cx, WidgetState::closed());
        assert!(dialog.find(ElementKind::Trigger).is_some());
        assert!(dialog.find(ElementKind::Content).is_none());
        assert!(dialog.find(ElementKind::Overlay).is_none());
    }

    #[test]
    fn content_is_always_inside_overlay_inside_portal() {
        let mut cx = cx(Platform::Web);
        let dialog = full_dialog(&mut cx, WidgetState::open());

        let portal = dialog.find(ElementKind::Portal).expect("portal present");
        let overlay = portal.find(ElementKind::Overlay).expect("overlay inside portal");
        assert!(
            overlay.find(ElementKind::Content).is_some(),
            "content nests inside the overlay"
        );
        assert_eq!(dialog.count(ElementKind::Content), 1);
    }

    #[test]
    fn opening_applies_entering_presentation() {
        let mut cx = cx(Platform::Web);
        let dialog = full_dialog(&mut cx, WidgetState::open());

        let overlay = dialog.find(ElementKind::Overlay).unwrap();
        assert!(overlay.class.contains("fade-in-0"));
        let content = dialog.find(ElementKind::Content).unwrap();
        assert!(content.class.contains("zoom-in-95"));
        assert_eq!(content.transition, Some(Transition::CONTENT_ZOOM));
    }

    #[test]
    fn closing_keeps_subtree_with_exit_presentation() {
        // open == false while the primitive defers unmount: the tree still
        // contains the panel, now carrying exit tokens.
        let mut cx = cx(Platform::Web);
        let dialog = root(&mut cx, &WidgetState::closed(), |cx| {
            vec![content(cx, ContentProps::default(), Vec::new())]
        });

        let content = dialog.find(ElementKind::Content).unwrap();
        assert!(content.class.contains("zoom-out-95"));
        let overlay = dialog.find(ElementKind::Overlay).unwrap();
        assert!(overlay.class.contains("fade-out-0"));
    }

    #[test]
    fn action_and_cancel_use_fixed_variants() {
        let mut cx = cx(Platform::Web);
        let dialog = full_dialog(&mut cx, WidgetState::open());

        let action = dialog.find(ElementKind::Action).unwrap();
        assert!(action.class.contains("bg-primary"));
        let action_text = action.find(ElementKind::Text).unwrap();
        assert!(action_text.class.contains("text-primary-foreground"));

        let cancel = dialog.find(ElementKind::Cancel).unwrap();
        assert!(cancel.class.contains("border-input"));
        assert!(!cancel.class.contains("bg-primary"));
    }

    #[test]
    fn portal_host_is_forwarded() {
        let mut cx = cx(Platform::Web);
        let dialog = root(&mut cx, &WidgetState::open(), |cx| {
            vec![content(
                cx,
                ContentProps {
                    portal_host: Some("modal-host"),
                    ..ContentProps::default()
                },
                Vec::new(),
            )]
        });
        let portal = dialog.find(ElementKind::Portal).unwrap();
        assert_eq!(portal.portal_host.as_deref(), Some("modal-host"));
    }

    #[test]
    fn native_dialog_gets_absolute_fill_overlay() {
        let mut cx = cx(Platform::Native);
        let dialog = full_dialog(&mut cx, WidgetState::open());
        let overlay = dialog.find(ElementKind::Overlay).unwrap();
        assert!(overlay.frame.is_some(), "native overlay pins to the viewport");
    }

    #[test]
    #[should_panic(expected = "no enclosing root scope")]
    fn content_outside_root_fails_fast() {
        let mut cx = cx(Platform::Web);
        let _ = content(&mut cx, ContentProps::default(), Vec::new());
    }
}
