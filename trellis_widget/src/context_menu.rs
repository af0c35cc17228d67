// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The context menu family: a press-anchored menu with submenus.
//!
//! Topology: `root` establishes the menu instance and `content` nests the
//! panel inside `Portal` ⊃ `Overlay`. Items come in plain, checkbox, and
//! radio forms; the checkable forms reserve a fixed left-aligned indicator
//! slot whether or not the indicator is currently shown. `sub` establishes a
//! nested scope per submenu so `sub_trigger` and `sub_content` reflect the
//! submenu's own open state, never the parent menu's.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use bitflags::bitflags;
use trellis_class::ClassList;
use trellis_platform::Platform;
use trellis_scope::{Side, WidgetState};

use crate::cx::BuildCx;
use crate::element::{Element, ElementKind, Props};
use crate::overlay::OverlayProps;
use crate::transition::Transition;

const CONTENT_BASE: &str = "z-50 min-w-[8rem] overflow-hidden rounded-md border border-border \
     bg-popover p-1 shadow-foreground/5 shadow-md";

const ITEM_BASE: &str = "group relative flex flex-row items-center gap-2 rounded-sm px-2 \
     py-1.5 native:py-2 web:cursor-default web:outline-none web:hover:bg-accent \
     web:focus:bg-accent active:bg-accent";

const CHECKABLE_BASE: &str = "web:group relative flex flex-row items-center rounded-sm py-1.5 \
     native:py-2 pr-2 pl-8 web:cursor-default web:outline-none web:focus:bg-accent \
     active:bg-accent";

const SUB_TRIGGER_BASE: &str = "flex flex-row items-center gap-2 rounded-sm px-2 py-1.5 \
     native:py-2 web:cursor-default web:select-none web:outline-none web:hover:bg-accent \
     web:focus:bg-accent active:bg-accent";

const INDICATOR_SLOT_BASE: &str = "absolute left-2 flex h-3.5 w-3.5 items-center justify-center";

const ITEM_TEXT: &str =
    "select-none text-sm native:text-lg text-popover-foreground web:group-focus:text-accent-foreground";

const SUB_TRIGGER_TEXT: &str = "select-none text-sm native:text-lg text-primary";

const DISABLED_TOKENS: &str = "web:pointer-events-none opacity-50";
const INSET_TOKEN: &str = "pl-8";

bitflags! {
    /// Boolean item modifiers, each adding one deterministic token set
    /// through the class resolver.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct ItemModifiers: u8 {
        /// Indents the item to align with checkable items' indicator slots.
        const INSET = 1 << 0;
        /// Suppresses pointer interaction and dims the item.
        const DISABLED = 1 << 1;
    }
}

/// Properties for [`content`].
#[derive(Clone, Debug, Default)]
pub struct ContentProps<'a> {
    /// Caller class overrides for the menu panel.
    pub class: Option<&'a str>,
    /// Caller class overrides for the dismiss layer.
    pub overlay_class: Option<&'a str>,
    /// Mounts the portal at a named host instead of the default target.
    pub portal_host: Option<&'a str>,
}

/// Establishes one menu instance; `state` comes from the headless primitive.
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

/// Builds the press-anchored trigger region.
#[must_use]
pub fn trigger(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    let mut element = Element::new(ElementKind::Trigger, cx.alloc_node());
    element.class = ClassList::default().extend(props.class).resolve();
    element.attrs = props.attrs;
    element.children = children;
    element
}

/// Builds the menu panel, wrapped in its dismiss layer and portal.
///
/// The menu's overlay is a pure dismiss/positioning layer: it carries no
/// fade of its own (unlike a dialog backdrop), while the panel itself pops
/// across the `open` edge. On native the overlay still pins to the viewport
/// so outside presses can dismiss.
///
/// # Panics
///
/// Panics if built outside a menu [`root`].
#[must_use]
pub fn content(cx: &mut BuildCx, props: ContentProps<'_>, children: Vec<Element>) -> Element {
    let state = *cx.scopes.root();

    let mut panel = Element::new(ElementKind::Content, cx.alloc_node());
    panel.class = ClassList::new(CONTENT_BASE)
        .maybe(state.side.map(slide_class))
        .and(Transition::MENU_POP.classes(state.open))
        .extend(props.class)
        .resolve();
    panel.transition = Some(Transition::MENU_POP);
    panel.children = children;

    let build_overlay = cx.overlay();
    let overlay = build_overlay(
        cx,
        &OverlayProps {
            base: "",
            class: props.overlay_class,
            transition: None,
        },
        vec![panel],
    );

    let mut portal = Element::new(ElementKind::Portal, cx.alloc_node());
    portal.portal_host = props.portal_host.map(String::from);
    portal.children = vec![overlay];
    portal
}

/// Builds a grouping container for related items.
#[must_use]
pub fn group(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    container(cx, ElementKind::Group, props, children)
}

/// Builds a grouping container for radio items sharing one selection.
#[must_use]
pub fn radio_group(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    container(cx, ElementKind::RadioGroup, props, children)
}

/// Builds a plain selectable item.
///
/// Children build inside the item's derived text-class scope, so nested
/// text picks up the popover foreground automatically.
#[must_use]
pub fn item(
    cx: &mut BuildCx,
    props: Props<'_>,
    modifiers: ItemModifiers,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let node = cx.alloc_node();
    let scope = cx.scopes.push_text_class(ITEM_TEXT);
    let built = children(cx);
    cx.scopes.pop(scope);

    let mut element = Element::new(ElementKind::Item, node);
    element.class = ClassList::new(ITEM_BASE)
        .when(modifiers.contains(ItemModifiers::INSET), INSET_TOKEN)
        .when(modifiers.contains(ItemModifiers::DISABLED), DISABLED_TOKENS)
        .extend(props.class)
        .resolve();
    element.attrs = props.attrs;
    element.children = built;
    element
}

/// Builds a checkable item with a reserved indicator slot.
///
/// `checked` is the primitive's item-indicator capability: the slot is
/// always present so labels never shift, while the check glyph renders only
/// while checked.
#[must_use]
pub fn checkbox_item(
    cx: &mut BuildCx,
    props: Props<'_>,
    modifiers: ItemModifiers,
    checked: bool,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let glyph_class = "text-foreground";
    checkable_item(cx, ElementKind::CheckboxItem, props, modifiers, checked, glyph_class, children)
}

/// Builds a single-select item with a reserved indicator slot.
#[must_use]
pub fn radio_item(
    cx: &mut BuildCx,
    props: Props<'_>,
    modifiers: ItemModifiers,
    selected: bool,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let glyph_class = "h-2 w-2 rounded-full bg-foreground";
    checkable_item(cx, ElementKind::RadioItem, props, modifiers, selected, glyph_class, children)
}

/// Builds a non-interactive heading.
#[must_use]
pub fn label(
    cx: &mut BuildCx,
    props: Props<'_>,
    modifiers: ItemModifiers,
    content: &str,
) -> Element {
    let mut element = Element::new(ElementKind::Label, cx.alloc_node());
    element.class =
        ClassList::new("web:cursor-default px-2 py-1.5 font-semibold native:text-base text-foreground text-sm")
            .when(modifiers.contains(ItemModifiers::INSET), INSET_TOKEN)
            .extend(props.class)
            .resolve();
    element.text = Some(content.into());
    element.attrs = props.attrs;
    element
}

/// Builds a horizontal rule between sections.
#[must_use]
pub fn separator(cx: &mut BuildCx, props: Props<'_>) -> Element {
    let mut element = Element::new(ElementKind::Separator, cx.alloc_node());
    element.class = ClassList::new("-mx-1 my-1 h-px bg-border")
        .extend(props.class)
        .resolve();
    element.attrs = props.attrs;
    element
}

/// Builds trailing keyboard-shortcut text.
#[must_use]
pub fn shortcut(cx: &mut BuildCx, props: Props<'_>, content: &str) -> Element {
    let mut element = Element::new(ElementKind::Shortcut, cx.alloc_node());
    element.class =
        ClassList::new("ml-auto text-xs native:text-sm text-muted-foreground tracking-widest")
            .extend(props.class)
            .resolve();
    element.text = Some(content.into());
    element.attrs = props.attrs;
    element
}

/// Establishes one submenu instance inside a menu.
///
/// Each nesting level gets its own scope: descendants' sub reads resolve to
/// this submenu's state, never the parent menu's.
#[must_use]
pub fn sub(
    cx: &mut BuildCx,
    state: &WidgetState,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let node = cx.alloc_node();
    let scope = cx.scopes.push_sub(*state);
    let built = children(cx);
    cx.scopes.pop(scope);

    let mut element = Element::new(ElementKind::Sub, node);
    element.children = built;
    element
}

/// Builds the item that opens its submenu.
///
/// Reads the submenu's own scope: the open highlight and the chevron
/// direction reflect this submenu, independent of the parent menu. The
/// chevron points right on web; on native it points up or down with the
/// open state.
///
/// # Panics
///
/// Panics if built outside a [`sub`].
#[must_use]
pub fn sub_trigger(
    cx: &mut BuildCx,
    props: Props<'_>,
    modifiers: ItemModifiers,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let open = cx.scopes.sub().open;

    let node = cx.alloc_node();
    let text_class = ClassList::new(SUB_TRIGGER_TEXT)
        .when(open, "native:text-accent-foreground")
        .resolve();
    let scope = cx.scopes.push_text_class(text_class);
    let mut built = children(cx);
    cx.scopes.pop(scope);

    let chevron = match cx.platform() {
        Platform::Web => "chevron-right",
        Platform::Native if open => "chevron-up",
        Platform::Native => "chevron-down",
    };
    let mut glyph = Element::new(ElementKind::Indicator, cx.alloc_node());
    glyph.class = String::from("ml-auto text-foreground");
    glyph.attrs.push("icon", chevron);
    built.push(glyph);

    let mut element = Element::new(ElementKind::SubTrigger, node);
    element.class = ClassList::new(SUB_TRIGGER_BASE)
        .when(open, "bg-accent")
        .when(modifiers.contains(ItemModifiers::INSET), INSET_TOKEN)
        .extend(props.class)
        .resolve();
    element.attrs = props.attrs;
    element.children = built;
    element
}

/// Builds the floating panel of a submenu.
///
/// Renders in place next to its trigger — no portal or overlay of its own —
/// and keys its pop off the submenu's own `open` edge.
///
/// # Panics
///
/// Panics if built outside a [`sub`].
#[must_use]
pub fn sub_content(cx: &mut BuildCx, props: Props<'_>, children: Vec<Element>) -> Element {
    let state = *cx.scopes.sub();

    let mut element = Element::new(ElementKind::SubContent, cx.alloc_node());
    element.class = ClassList::new(CONTENT_BASE)
        .and("mt-1")
        .maybe(state.side.map(slide_class))
        .and(Transition::MENU_POP.classes(state.open))
        .extend(props.class)
        .resolve();
    element.transition = Some(Transition::MENU_POP);
    element.attrs = props.attrs;
    element.children = children;
    element
}

/// Maps the placement side to the panel's slide-in token.
///
/// A panel placed on the bottom side slides in from the top, and so on.
const fn slide_class(side: Side) -> &'static str {
    match side {
        Side::Top => "slide-in-from-bottom-2",
        Side::Right => "slide-in-from-left-2",
        Side::Bottom => "slide-in-from-top-2",
        Side::Left => "slide-in-from-right-2",
    }
}

fn container(
    cx: &mut BuildCx,
    kind: ElementKind,
    props: Props<'_>,
    children: Vec<Element>,
) -> Element {
    let mut element = Element::new(kind, cx.alloc_node());
    element.class = ClassList::default().extend(props.class).resolve();
    element.attrs = props.attrs;
    element.children = children;
    element
}

fn checkable_item(
    cx: &mut BuildCx,
    kind: ElementKind,
    props: Props<'_>,
    modifiers: ItemModifiers,
    checked: bool,
    glyph_class: &str,
    children: impl FnOnce(&mut BuildCx) -> Vec<Element>,
) -> Element {
    let node = cx.alloc_node();

    // The slot is reserved regardless of checked state so labels never
    // shift when the indicator appears.
    let mut slot = Element::new(ElementKind::IndicatorSlot, cx.alloc_node());
    slot.class = String::from(INDICATOR_SLOT_BASE);
    if checked {
        let mut glyph = Element::new(ElementKind::Indicator, cx.alloc_node());
        glyph.class = String::from(glyph_class);
        slot.children.push(glyph);
    }

    let scope = cx.scopes.push_text_class(ITEM_TEXT);
    let built = children(cx);
    cx.scopes.pop(scope);

    let mut element = Element::new(kind, node);
    element.class = ClassList::new(CHECKABLE_BASE)
        .when(modifiers.contains(ItemModifiers::INSET), INSET_TOKEN)
        .when(modifiers.contains(ItemModifiers::DISABLED), DISABLED_TOKENS)
        .extend(props.class)
        .resolve();
    element.attrs = props.attrs;
    element.children = vec![slot];
    element.children.extend(built);
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::text;
    use kurbo::{Size, Vec2};
    use trellis_platform::Platform;
    use trellis_scope::Align;

    fn cx(platform: Platform) -> BuildCx {
        BuildCx::new(platform, Size::new(800.0, 600.0))
    }

    fn has_token(class: &str, token: &str) -> bool {
        class.split_whitespace().any(|t| t == token)
    }

    #[test]
    fn content_nests_portal_overlay_content() {
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::open(), |cx| {
            vec![content(cx, ContentProps::default(), Vec::new())]
        });
        let portal = menu.find(ElementKind::Portal).expect("portal present");
        let overlay = portal.find(ElementKind::Overlay).expect("overlay inside portal");
        assert!(overlay.find(ElementKind::Content).is_some());
    }

    #[test]
    fn panel_keys_pop_off_the_open_edge() {
        let mut cx = cx(Platform::Web);
        let open_menu = root(&mut cx, &WidgetState::open(), |cx| {
            vec![content(cx, ContentProps::default(), Vec::new())]
        });
        assert!(open_menu.find(ElementKind::Content).unwrap().class.contains("zoom-in-95"));

        let closing_menu = root(&mut cx, &WidgetState::closed(), |cx| {
            vec![content(cx, ContentProps::default(), Vec::new())]
        });
        assert!(closing_menu.find(ElementKind::Content).unwrap().class.contains("zoom-out"));
    }

    #[test]
    fn placement_side_picks_the_slide_token() {
        let mut cx = cx(Platform::Web);
        let state =
            WidgetState::open().placed(Side::Bottom, Align::Start, Vec2::new(0.0, 4.0));
        let menu = root(&mut cx, &state, |cx| {
            vec![content(cx, ContentProps::default(), Vec::new())]
        });
        let panel = menu.find(ElementKind::Content).unwrap();
        assert!(panel.class.contains("slide-in-from-top-2"));
    }

    #[test]
    fn disabled_tokens_apply_regardless_of_open_state() {
        for state in [WidgetState::open(), WidgetState::closed()] {
            let mut cx = cx(Platform::Web);
            let menu = root(&mut cx, &state, |cx| {
                vec![checkbox_item(
                    cx,
                    Props::default(),
                    ItemModifiers::DISABLED,
                    false,
                    |_| Vec::new(),
                )]
            });
            let item = menu.find(ElementKind::CheckboxItem).unwrap();
            assert!(item.class.contains("opacity-50"));
            assert!(item.class.contains("web:pointer-events-none"));
        }
    }

    #[test]
    fn inset_adds_exactly_the_indent_token() {
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::open(), |cx| {
            vec![item(cx, Props::default(), ItemModifiers::INSET, |_| Vec::new())]
        });
        let item = menu.find(ElementKind::Item).unwrap();
        assert!(item.class.contains("pl-8"));
        assert!(!item.class.contains("opacity-50"));
    }

    #[test]
    fn indicator_slot_is_reserved_even_when_unchecked() {
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::open(), |cx| {
            vec![
                checkbox_item(cx, Props::default(), ItemModifiers::empty(), false, |_| Vec::new()),
                checkbox_item(cx, Props::default(), ItemModifiers::empty(), true, |_| Vec::new()),
            ]
        });
        assert_eq!(menu.count(ElementKind::IndicatorSlot), 2);
        assert_eq!(menu.count(ElementKind::Indicator), 1, "glyph only while checked");
    }

    #[test]
    fn radio_item_glyph_is_a_filled_dot() {
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::open(), |cx| {
            let selected =
                radio_item(cx, Props::default(), ItemModifiers::empty(), true, |_| Vec::new());
            vec![radio_group(cx, Props::default(), vec![selected])]
        });
        let glyph = menu.find(ElementKind::Indicator).unwrap();
        assert!(glyph.class.contains("rounded-full"));
    }

    #[test]
    fn submenu_scope_is_isolated_from_parent() {
        // Parent menu open, submenu closed: the sub trigger must reflect
        // only the submenu's own state.
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::open(), |cx| {
            let submenu = sub(cx, &WidgetState::closed(), |cx| {
                vec![sub_trigger(cx, Props::default(), ItemModifiers::empty(), |cx| {
                    vec![text(cx, Props::default(), "More tools")]
                })]
            });
            vec![content(cx, ContentProps::default(), vec![submenu])]
        });
        let trigger = menu.find(ElementKind::SubTrigger).unwrap();
        assert!(
            !has_token(&trigger.class, "bg-accent"),
            "closed submenu trigger is not highlighted"
        );
    }

    #[test]
    fn open_submenu_highlights_its_trigger_and_panel() {
        let mut cx = cx(Platform::Web);
        let menu = root(&mut cx, &WidgetState::closed(), |cx| {
            vec![sub(cx, &WidgetState::open(), |cx| {
                vec![
                    sub_trigger(cx, Props::default(), ItemModifiers::empty(), |_| Vec::new()),
                    sub_content(cx, Props::default(), Vec::new()),
                ]
            })]
        });
        let trigger = menu.find(ElementKind::SubTrigger).unwrap();
        assert!(has_token(&trigger.class, "bg-accent"));
        let panel = menu.find(ElementKind::SubContent).unwrap();
        assert!(panel.class.contains("zoom-in-95"), "panel keys off its own submenu");
    }

    #[test]
    fn sub_trigger_chevron_is_platform_correct() {
        let mut web = cx(Platform::Web);
        let menu = root(&mut web, &WidgetState::open(), |cx| {
            vec![sub(cx, &WidgetState::open(), |cx| {
                vec![sub_trigger(cx, Props::default(), ItemModifiers::empty(), |_| Vec::new())]
            })]
        });
        let glyph = menu.find(ElementKind::Indicator).unwrap();
        assert_eq!(glyph.attrs.get("icon"), Some("chevron-right"));

        let mut native = cx(Platform::Native);
        let menu = root(&mut native, &WidgetState::open(), |cx| {
            vec![sub(cx, &WidgetState::open(), |cx| {
                vec![sub_trigger(cx, Props::default(), ItemModifiers::empty(), |_| Vec::new())]
            })]
        });
        let glyph = menu.find(ElementKind::Indicator).unwrap();
        assert_eq!(glyph.attrs.get("icon"), Some("chevron-up"));
    }

    #[test]
    #[should_panic(expected = "no enclosing sub scope")]
    fn sub_trigger_outside_sub_fails_fast() {
        let mut cx = cx(Platform::Web);
        let _ = root(&mut cx, &WidgetState::open(), |cx| {
            vec![sub_trigger(cx, Props::default(), ItemModifiers::empty(), |_| Vec::new())]
        });
    }
}
