// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a context menu with a checkbox item, a radio group, and an open
//! submenu, then prints the element tree.

use kurbo::{Size, Vec2};
use trellis_demos::print_tree;
use trellis_platform::Platform;
use trellis_scope::{Align, Side, WidgetState};
use trellis_widget::context_menu::{self, ContentProps, ItemModifiers};
use trellis_widget::{text, BuildCx, Props};

fn main() {
    let mut cx = BuildCx::new(Platform::Native, Size::new(390.0, 844.0));
    let state = WidgetState::open().placed(Side::Bottom, Align::Start, Vec2::new(0.0, 4.0));

    let menu = context_menu::root(&mut cx, &state, |cx| {
        let trigger = context_menu::trigger(cx, Props::default(), Vec::new());
        let density = vec![
            context_menu::radio_item(cx, Props::default(), ItemModifiers::empty(), true, |cx| {
                vec![text(cx, Props::default(), "Comfortable")]
            }),
            context_menu::radio_item(cx, Props::default(), ItemModifiers::empty(), false, |cx| {
                vec![text(cx, Props::default(), "Compact")]
            }),
        ];
        let submenu = context_menu::sub(cx, &WidgetState::open(), |cx| {
            let sub_trigger =
                context_menu::sub_trigger(cx, Props::default(), ItemModifiers::empty(), |cx| {
                    vec![text(cx, Props::default(), "More tools")]
                });
            let tools = vec![
                context_menu::item(cx, Props::default(), ItemModifiers::empty(), |cx| {
                    vec![
                        text(cx, Props::default(), "Save page as…"),
                        context_menu::shortcut(cx, Props::default(), "⌘S"),
                    ]
                }),
                context_menu::item(cx, Props::default(), ItemModifiers::DISABLED, |cx| {
                    vec![text(cx, Props::default(), "Developer tools")]
                }),
            ];
            vec![sub_trigger, context_menu::sub_content(cx, Props::default(), tools)]
        });
        let items = vec![
            context_menu::label(cx, Props::default(), ItemModifiers::empty(), "View"),
            context_menu::checkbox_item(cx, Props::default(), ItemModifiers::empty(), true, |cx| {
                vec![text(cx, Props::default(), "Show toolbar")]
            }),
            context_menu::separator(cx, Props::default()),
            context_menu::radio_group(cx, Props::default(), density),
            context_menu::separator(cx, Props::default()),
            submenu,
        ];
        let content = context_menu::content(cx, ContentProps::default(), items);
        vec![trigger, content]
    });

    print_tree(&menu, 0);
}
