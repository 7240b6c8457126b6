// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// App-level tests for the panel state machine: home renders both mode
// buttons, text mode mounts and unmounts cleanly, and nothing from a closed
// chat session survives the return to home.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use klypochat_ui::components::app::AppRoot;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn home_renders_both_mode_buttons() {
    let mount = support::create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector("#home").unwrap().is_some());
    assert!(mount.query_selector("#start-video-btn").unwrap().is_some());
    assert!(mount.query_selector("#start-text-btn").unwrap().is_some());
    assert!(
        mount.query_selector("#text-chat").unwrap().is_none(),
        "no chat panel before a mode is entered"
    );

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn entering_text_mode_swaps_home_for_chat_panel() {
    let mount = support::create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    support::click(&mount, "#start-text-btn");
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector("#text-chat").unwrap().is_some());
    assert!(
        mount.query_selector("#home").unwrap().is_none(),
        "home panel should be hidden while chatting"
    );

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn leaving_text_mode_returns_home_with_no_chat_left_behind() {
    let mount = support::create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    support::click(&mount, "#start-text-btn");
    sleep(Duration::ZERO).await;
    support::click(&mount, "#leave-btn");
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector("#home").unwrap().is_some());
    assert!(mount.query_selector("#text-chat").unwrap().is_none());
    assert_eq!(
        support::count(&mount, ".msg"),
        0,
        "transcript must be cleared when leaving text mode"
    );

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn reopening_chat_starts_with_a_fresh_transcript() {
    let mount = support::create_mount_point();
    yew::Renderer::<AppRoot>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    support::click(&mount, "#start-text-btn");
    sleep(Duration::ZERO).await;

    let input = support::chat_input(&mount);
    input.set_value("hello");
    support::click(&mount, "#send-btn");
    sleep(Duration::ZERO).await;
    assert_eq!(support::count(&mount, ".msg"), 2);

    support::click(&mount, "#leave-btn");
    sleep(Duration::ZERO).await;
    support::click(&mount, "#start-text-btn");
    sleep(Duration::ZERO).await;

    // Greeting only; the previous session's lines are gone.
    assert_eq!(support::count(&mount, ".msg"), 1);
    assert_eq!(support::count(&mount, ".msg.local"), 0);

    support::cleanup(&mount);
}
