// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds one alert dialog on both platforms and prints the element trees.
//!
//! The same assembly code runs for web and native; only the overlay
//! implementation selected at context construction differs.

use kurbo::Size;
use trellis_demos::print_tree;
use trellis_platform::Platform;
use trellis_scope::WidgetState;
use trellis_widget::{alert_dialog, text, BuildCx, Props};

fn build_dialog(cx: &mut BuildCx) -> trellis_widget::Element {
    alert_dialog::root(cx, &WidgetState::open(), |cx| {
        let trigger = alert_dialog::trigger(cx, Props::default(), Vec::new());
        let head = vec![
            alert_dialog::title(cx, Props::default(), "Discard draft?"),
            alert_dialog::description(cx, Props::default(), "This cannot be undone."),
        ];
        let buttons = vec![
            alert_dialog::cancel(cx, Props::default(), |cx| {
                vec![text(cx, Props::default(), "Keep editing")]
            }),
            alert_dialog::action(cx, Props::default(), |cx| {
                vec![text(cx, Props::default(), "Discard")]
            }),
        ];
        let body = vec![
            alert_dialog::header(cx, Props::default(), head),
            alert_dialog::footer(cx, Props::default(), buttons),
        ];
        let content = alert_dialog::content(cx, alert_dialog::ContentProps::default(), body);
        vec![trigger, content]
    })
}

fn main() {
    for platform in Platform::ALL {
        println!("== {platform} ==");
        let mut cx = BuildCx::new(platform, Size::new(390.0, 844.0));
        let dialog = build_dialog(&mut cx);
        print_tree(&dialog, 0);
        println!();
    }
}
