// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Behavior tests for the text chat panel: greeting on open, local sends,
// blank-input rejection, and the leave callback.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use klypochat_ui::components::chat_panel::{ChatPanel, ChatPanelProps};
use klypochat_ui::constants::CHAT_GREETING;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_panel(mount: &web_sys::Element, on_leave: Callback<()>) {
    yew::Renderer::<ChatPanel>::with_root_and_props(mount.clone(), ChatPanelProps { on_leave })
        .render();
}

#[wasm_bindgen_test]
async fn greeting_renders_on_open() {
    let mount = support::create_mount_point();
    render_panel(&mount, Callback::noop());
    sleep(Duration::ZERO).await;

    assert_eq!(support::count(&mount, ".msg"), 1);
    let greeting = support::query(&mount, ".msg.remote");
    assert_eq!(greeting.text_content().unwrap(), CHAT_GREETING);

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn sending_hello_appends_one_local_entry_and_clears_input() {
    let mount = support::create_mount_point();
    render_panel(&mount, Callback::noop());
    sleep(Duration::ZERO).await;

    let input = support::chat_input(&mount);
    input.set_value("hello");
    support::click(&mount, "#send-btn");
    sleep(Duration::ZERO).await;

    assert_eq!(support::count(&mount, ".msg.local"), 1);
    let sent = support::query(&mount, ".msg.local");
    assert_eq!(sent.text_content().unwrap(), "hello");
    assert_eq!(input.value(), "", "input should clear after a send");

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn whitespace_only_send_leaves_transcript_unchanged() {
    let mount = support::create_mount_point();
    render_panel(&mount, Callback::noop());
    sleep(Duration::ZERO).await;

    let before = support::count(&mount, ".msg");

    let input = support::chat_input(&mount);
    input.set_value("   \t  ");
    support::click(&mount, "#send-btn");
    sleep(Duration::ZERO).await;

    assert_eq!(
        support::count(&mount, ".msg"),
        before,
        "blank input must not be appended"
    );
    assert_eq!(support::count(&mount, ".msg.local"), 0);

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn consecutive_sends_keep_order() {
    let mount = support::create_mount_point();
    render_panel(&mount, Callback::noop());
    sleep(Duration::ZERO).await;

    let input = support::chat_input(&mount);
    for text in ["first", "second"] {
        input.set_value(text);
        support::click(&mount, "#send-btn");
        sleep(Duration::ZERO).await;
    }

    let locals = mount.query_selector_all(".msg.local").unwrap();
    assert_eq!(locals.length(), 2);
    assert_eq!(locals.item(0).unwrap().text_content().unwrap(), "first");
    assert_eq!(locals.item(1).unwrap().text_content().unwrap(), "second");

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn leave_button_fires_callback() {
    let fired = Rc::new(Cell::new(false));
    let on_leave = {
        let fired = Rc::clone(&fired);
        Callback::from(move |_| fired.set(true))
    };

    let mount = support::create_mount_point();
    render_panel(&mount, on_leave);
    sleep(Duration::ZERO).await;

    support::click(&mount, "#leave-btn");
    sleep(Duration::ZERO).await;

    assert!(fired.get(), "leave button should emit the on_leave callback");

    support::cleanup(&mount);
}
