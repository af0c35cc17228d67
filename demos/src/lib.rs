// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Trellis demos.

use trellis_widget::Element;

/// Prints an element tree with indentation, one node per line.
pub fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{}", element.kind.as_str());
    if let Some(text) = &element.text {
        line.push_str(&format!(" {text:?}"));
    }
    if let Some(frame) = element.frame {
        line.push_str(&format!(" frame={:.0}x{:.0}", frame.width(), frame.height()));
    }
    if let Some(transition) = element.transition {
        line.push_str(&format!(" ({}ms)", transition.duration_ms));
    }
    if !element.class.is_empty() {
        line.push_str(&format!("  [{}]", element.class));
    }
    println!("{line}");
    for child in &element.children {
        print_tree(child, depth + 1);
    }
}
