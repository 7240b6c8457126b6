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

//! Camera/microphone acquisition and ownership of the granted tracks.

use gloo_utils::window;
use log::error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::prelude::Callback;

/// The granted camera+microphone stream. The owner must call
/// [`LocalCapture::stop`] when the session ends so the devices are released.
pub struct LocalCapture {
    stream: MediaStream,
}

impl LocalCapture {
    pub fn new(stream: MediaStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &MediaStream {
        &self.stream
    }

    /// Stop every audio and video track.
    pub fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
    }
}

/// Request camera+microphone access. Exactly one of the callbacks fires:
/// `on_granted` with the stream, or `on_denied` when the user rejects the
/// prompt or no device is available.
pub fn request_local_media(on_granted: Callback<MediaStream>, on_denied: Callback<()>) {
    wasm_bindgen_futures::spawn_local(async move {
        match acquire().await {
            Ok(stream) => on_granted.emit(stream),
            Err(e) => {
                error!("getUserMedia failed: {e:?}");
                on_denied.emit(());
            }
        }
    });
}

async fn acquire() -> Result<MediaStream, JsValue> {
    let media_devices = window().navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::from_bool(true));
    constraints.set_video(&JsValue::from_bool(true));

    let promise = media_devices.get_user_media_with_constraints(&constraints)?;
    Ok(JsFuture::from(promise).await?.unchecked_into::<MediaStream>())
}
