// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text leaves that adopt the nearest ambient text class.

use trellis_class::ClassList;

use crate::cx::BuildCx;
use crate::element::{Element, ElementKind, Props};

const TEXT_BASE: &str = "text-base text-foreground web:select-text";

/// Builds a text leaf.
///
/// The nearest enclosing text-class scope — pushed by an actionable leaf
/// such as a dialog `Action` or a menu item — lands between the structural
/// tokens and the caller's, so nested text adopts the correct contrast
/// without being told the variant explicitly.
#[must_use]
pub fn text(cx: &mut BuildCx, props: Props<'_>, content: &str) -> Element {
    let node = cx.alloc_node();
    let mut element = Element::new(ElementKind::Text, node);
    element.class = ClassList::new(TEXT_BASE)
        .maybe(cx.scopes.text_class())
        .extend(props.class)
        .resolve();
    element.text = Some(content.into());
    element.attrs = props.attrs;
    element
}
