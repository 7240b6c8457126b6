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

//! Landing panel: pick a mode, or read the permission-denied notice.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_start_video: Callback<MouseEvent>,
    pub on_start_text: Callback<MouseEvent>,
    /// True while a getUserMedia prompt is outstanding.
    pub connecting: bool,
    /// Set when the last camera/microphone request was denied.
    pub media_denied: bool,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="panel home-panel" id="home">
            <h1>{ "KlypoChat" }</h1>
            <p>{ "Talk to a random stranger. Video or text, your pick." }</p>
            if props.media_denied {
                <p class="media-error">{ "Camera access denied. Check permissions." }</p>
            }
            <div class="controls">
                <button class="btn" id="start-video-btn" disabled={props.connecting}
                        onclick={props.on_start_video.clone()}>
                    { if props.connecting { "Connecting..." } else { "Start Video" } }
                </button>
                <button class="btn" id="start-text-btn" disabled={props.connecting}
                        onclick={props.on_start_text.clone()}>
                    { "Start Text" }
                </button>
            </div>
        </div>
    }
}
