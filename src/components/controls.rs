/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Call control button components with SVG icons.

use yew::prelude::*;

// =============================================================================
// Record Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct RecordButtonProps {
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(RecordButton)]
pub fn record_button(props: &RecordButtonProps) -> Html {
    let class = classes!("call-control-button", props.active.then_some("active"));

    html! {
        <button {class} id="record-btn" onclick={props.onclick.clone()}>
            {
                if props.active {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                                <rect x="7" y="7" width="10" height="10" rx="1"></rect>
                            </svg>
                            <span class="tooltip">{"Stop Recording"}</span>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <circle cx="12" cy="12" r="9"></circle>
                                <circle cx="12" cy="12" r="4" fill="currentColor" stroke="none"></circle>
                            </svg>
                            <span class="tooltip">{"Record"}</span>
                        </>
                    }
                }
            }
        </button>
    }
}

// =============================================================================
// Hang Up Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct HangUpButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(HangUpButton)]
pub fn hang_up_button(props: &HangUpButtonProps) -> Html {
    html! {
        <button class="call-control-button danger" id="hang-up-btn" onclick={props.onclick.clone()}>
            <span class="tooltip">{"Hang Up"}</span>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M3 14c0-2 1.5-3.8 4.2-4.8a14.8 14.8 0 0 1 9.6 0C19.5 10.2 21 12 21 14v1.2a1.8 1.8 0 0 1-1.8 1.8h-1.9a1.8 1.8 0 0 1-1.8-1.8v-1.3a9.8 9.8 0 0 0-7 0v1.3a1.8 1.8 0 0 1-1.8 1.8H4.8A1.8 1.8 0 0 1 3 15.2z"></path>
            </svg>
        </button>
    }
}
