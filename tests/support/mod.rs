// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for klypochat-ui component tests.
//
// Provides mount/cleanup helpers and DOM interaction shortcuts so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Find an element under `mount` by CSS selector, panicking with the
/// selector in the message when it is missing.
pub fn query(mount: &web_sys::Element, selector: &str) -> web_sys::Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector:?}"))
}

/// Fire a real (bubbling) click on the element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    query(mount, selector)
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Get the chat input under `mount`.
pub fn chat_input(mount: &web_sys::Element) -> web_sys::HtmlInputElement {
    query(mount, "#chat-input").unchecked_into::<web_sys::HtmlInputElement>()
}

/// Count the elements matching `selector` under `mount`.
pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}
