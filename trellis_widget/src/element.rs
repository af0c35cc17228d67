// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained element tree produced by a build pass.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::transition::Transition;

/// An opaque, generational handle to one rendered node.
///
/// The building wrapper exclusively owns the underlying node for the
/// lifetime of the mounted instance and exposes it upward only by handle,
/// never by copy of the node. Handles from a previous build pass carry a
/// stale generation and can not match a node from the current pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

impl NodeRef {
    /// Returns the node index within its generation.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the build-pass generation the handle belongs to.
    #[must_use]
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Mints [`NodeRef`]s for one build pass.
#[derive(Debug, Default)]
pub(crate) struct NodeAllocator {
    next: u32,
    generation: u32,
}

impl NodeAllocator {
    pub(crate) fn alloc(&mut self) -> NodeRef {
        let index = self.next;
        self.next += 1;
        NodeRef {
            index,
            generation: self.generation,
        }
    }

    /// Starts a new generation; handles minted earlier no longer match.
    pub(crate) fn next_generation(&mut self) {
        self.generation += 1;
        self.next = 0;
    }
}

/// Unrecognized properties forwarded to the underlying primitive unchanged.
///
/// This is the pass-through half of the sub-component contract: the assembly
/// consumes the properties it understands (`class`, modifiers) and everything
/// else rides along to the rendered node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs(SmallVec<[(&'static str, String); 2]>);

impl Attrs {
    /// Creates an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute, preserving insertion order.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Returns the value of the first attribute with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Properties accepted by every sub-component.
///
/// `class` is appended after structural and ambient tokens so callers can
/// override any property those set. `attrs` is forwarded unchanged.
#[derive(Clone, Debug, Default)]
pub struct Props<'a> {
    /// Caller class overrides, appended last.
    pub class: Option<&'a str>,
    /// Pass-through attributes.
    pub attrs: Attrs,
}

impl<'a> Props<'a> {
    /// Properties carrying only caller classes.
    #[must_use]
    pub fn class(class: &'a str) -> Self {
        Self {
            class: Some(class),
            attrs: Attrs::new(),
        }
    }
}

/// Identifies the role of an element within its widget family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The widget instance root.
    Root,
    /// Toggles the open state on activation.
    Trigger,
    /// Mounts its subtree outside normal layout order.
    Portal,
    /// The dismiss/backdrop layer between portal and content.
    Overlay,
    /// The floating content panel.
    Content,
    /// A plain container.
    View,
    /// A text leaf.
    Text,
    /// Dialog header block.
    Header,
    /// Dialog footer block.
    Footer,
    /// Dialog title text.
    Title,
    /// Dialog description text.
    Description,
    /// Confirm-and-dismiss trigger.
    Action,
    /// Dismiss-only trigger.
    Cancel,
    /// A grouping container for menu items.
    Group,
    /// A grouping container for radio items.
    RadioGroup,
    /// A selectable menu item.
    Item,
    /// A checkable menu item.
    CheckboxItem,
    /// A single-select menu item.
    RadioItem,
    /// The reserved, fixed-position indicator slot of a checkable item.
    IndicatorSlot,
    /// The indicator glyph, present only while checked/selected.
    Indicator,
    /// A non-interactive menu heading.
    Label,
    /// A horizontal rule between menu sections.
    Separator,
    /// Trailing keyboard-shortcut text.
    Shortcut,
    /// A nested submenu instance.
    Sub,
    /// Opens its submenu; reflects the submenu's own state.
    SubTrigger,
    /// The floating panel of a submenu.
    SubContent,
}

impl ElementKind {
    /// Returns the kind name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Trigger => "trigger",
            Self::Portal => "portal",
            Self::Overlay => "overlay",
            Self::Content => "content",
            Self::View => "view",
            Self::Text => "text",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Title => "title",
            Self::Description => "description",
            Self::Action => "action",
            Self::Cancel => "cancel",
            Self::Group => "group",
            Self::RadioGroup => "radio-group",
            Self::Item => "item",
            Self::CheckboxItem => "checkbox-item",
            Self::RadioItem => "radio-item",
            Self::IndicatorSlot => "indicator-slot",
            Self::Indicator => "indicator",
            Self::Label => "label",
            Self::Separator => "separator",
            Self::Shortcut => "shortcut",
            Self::Sub => "sub",
            Self::SubTrigger => "sub-trigger",
            Self::SubContent => "sub-content",
        }
    }
}

/// One node of the retained element tree.
///
/// Plain data: the host integration walks the tree and materializes real
/// views. Fields a sub-component did not set keep their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// The element's role.
    pub kind: ElementKind,
    /// Opaque handle to the rendered node.
    pub node: NodeRef,
    /// The fully resolved class string.
    pub class: String,
    /// Pass-through attributes, forwarded unchanged.
    pub attrs: Attrs,
    /// Text content for text leaves.
    pub text: Option<String>,
    /// Named portal host, for portal elements mounting at a specific target.
    pub portal_host: Option<String>,
    /// Fixed frame in logical pixels, when the element positions itself
    /// outside normal layout (the native absolute-fill overlay).
    pub frame: Option<Rect>,
    /// Enter/exit transition keyed off the ambient `open` edge.
    pub transition: Option<Transition>,
    /// Child elements in paint order.
    pub children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(kind: ElementKind, node: NodeRef) -> Self {
        Self {
            kind,
            node,
            class: String::new(),
            attrs: Attrs::new(),
            text: None,
            portal_host: None,
            frame: None,
            transition: None,
            children: Vec::new(),
        }
    }

    /// Returns the first element of the given kind, depth-first, including
    /// `self`.
    #[must_use]
    pub fn find(&self, kind: ElementKind) -> Option<&Self> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(kind))
    }

    /// Visits `self` and every descendant, depth-first.
    pub fn walk(&self, visit: &mut impl FnMut(&Self)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Counts elements of the given kind in the subtree.
    #[must_use]
    pub fn count(&self, kind: ElementKind) -> usize {
        let mut n = 0;
        self.walk(&mut |element| {
            if element.kind == kind {
                n += 1;
            }
        });
        n
    }
}
