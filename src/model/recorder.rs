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

//! Local recording of the captured stream, finalized into a downloadable
//! webm file.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::document;
use log::{debug, error};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, HtmlAnchorElement, MediaRecorder, MediaStream,
    RecordingState, Url,
};
use yew::prelude::Callback;

use crate::constants::{RECORDING_FILE_PREFIX, RECORDING_MIME_TYPE};

/// An in-progress recording. Media fragments accumulate until [`finish`] is
/// called, which assembles them into a single blob and hands it to the
/// browser's download mechanism. Dropping the job while it is still
/// recording detaches the handlers first, so the fragments are discarded
/// without producing a file.
///
/// [`finish`]: RecordingJob::finish
pub struct RecordingJob {
    recorder: MediaRecorder,
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut()>,
}

impl RecordingJob {
    /// Begin recording `stream`. `on_finalized` fires once an explicitly
    /// finished recording has been handed to the browser for download.
    pub fn start(stream: &MediaStream, on_finalized: Callback<()>) -> Result<Self, JsValue> {
        let recorder = MediaRecorder::new_with_media_stream(stream)?;
        let chunks: Rc<RefCell<Vec<Blob>>> = Rc::new(RefCell::new(Vec::new()));

        let on_data = {
            let chunks = Rc::clone(&chunks);
            Closure::wrap(Box::new(move |event: BlobEvent| {
                if let Some(data) = event.data() {
                    chunks.borrow_mut().push(data);
                }
            }) as Box<dyn FnMut(BlobEvent)>)
        };

        let on_stop = Closure::wrap(Box::new(move || {
            // An immediately-stopped recording may have zero fragments;
            // that still yields a valid, empty file.
            if let Err(e) = finalize(&chunks.borrow()) {
                error!("failed to finalize recording: {e:?}");
            }
            on_finalized.emit(());
        }) as Box<dyn FnMut()>);

        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
        recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
        recorder.start()?;
        debug!("recording started");

        Ok(Self {
            recorder,
            _on_data: on_data,
            _on_stop: on_stop,
        })
    }

    pub fn is_active(&self) -> bool {
        self.recorder.state() == RecordingState::Recording
    }

    /// Stop capturing and finalize into a download.
    pub fn finish(&self) {
        if !self.is_active() {
            return;
        }
        if let Err(e) = self.recorder.stop() {
            error!("failed to stop recorder: {e:?}");
        }
    }
}

impl Drop for RecordingJob {
    fn drop(&mut self) {
        // Detach before stopping so a teardown never pops a download and a
        // pending stop event cannot reach an already-freed closure.
        self.recorder.set_ondataavailable(None);
        self.recorder.set_onstop(None);
        if self.is_active() {
            if let Err(e) = self.recorder.stop() {
                error!("failed to cancel recorder: {e:?}");
            } else {
                debug!("recording cancelled");
            }
        }
    }
}

fn finalize(chunks: &[Blob]) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    for chunk in chunks {
        parts.push(chunk);
    }
    let options = BlobPropertyBag::new();
    options.set_type(RECORDING_MIME_TYPE);
    let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let filename = format!("{RECORDING_FILE_PREFIX}-{}.webm", js_sys::Date::now() as u64);
    let anchor = document()
        .create_element("a")?
        .unchecked_into::<HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(&filename);
    anchor.click();
    Url::revoke_object_url(&url)?;
    debug!("recording saved as {filename}");
    Ok(())
}
