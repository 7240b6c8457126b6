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

//! Video call panel: local preview, synthetic remote feed, and recording.
//!
//! The panel mounts only after the media grant, receives the stream by
//! prop, and releases everything it started in `destroy`. Track ownership
//! stays with the app root.

use log::{debug, error};
use web_sys::{HtmlCanvasElement, HtmlVideoElement, MediaStream};
use yew::prelude::*;

use super::controls::{HangUpButton, RecordButton};
use crate::model::recorder::RecordingJob;
use crate::model::remote_feed::SyntheticRemoteFeed;

#[derive(Properties, PartialEq)]
pub struct VideoPanelProps {
    /// The already-granted camera+microphone stream, owned by the app root.
    pub stream: MediaStream,
    pub on_hang_up: Callback<()>,
}

pub enum Msg {
    ToggleRecording,
    RecordingFinalized,
    HangUp,
}

pub struct VideoPanel {
    local_preview: NodeRef,
    remote_canvas: NodeRef,
    remote_feed: Option<SyntheticRemoteFeed>,
    recording: Option<RecordingJob>,
}

impl Component for VideoPanel {
    type Message = Msg;
    type Properties = VideoPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            local_preview: NodeRef::default(),
            remote_canvas: NodeRef::default(),
            remote_feed: None,
            recording: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleRecording => match self.recording.as_ref() {
                Some(job) if job.is_active() => {
                    job.finish();
                    true
                }
                // Finalization already in flight.
                Some(_) => false,
                None => {
                    let on_finalized = ctx.link().callback(|_| Msg::RecordingFinalized);
                    match RecordingJob::start(&ctx.props().stream, on_finalized) {
                        Ok(job) => {
                            self.recording = Some(job);
                            true
                        }
                        Err(e) => {
                            error!("could not start recording: {e:?}");
                            false
                        }
                    }
                }
            },
            Msg::RecordingFinalized => {
                self.recording = None;
                true
            }
            Msg::HangUp => {
                ctx.props().on_hang_up.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let recording_active = self.recording.as_ref().is_some_and(|job| job.is_active());
        html! {
            <div class="panel video-panel" id="video-call">
                <div class="preview-grid">
                    <div class="canvas-container">
                        <canvas id="remote-preview" ref={self.remote_canvas.clone()}></canvas>
                        <h4 class="floating-name">{ "Stranger" }</h4>
                    </div>
                    <div class="canvas-container">
                        <video id="local-preview" ref={self.local_preview.clone()}></video>
                        <h4 class="floating-name">{ "You" }</h4>
                    </div>
                </div>
                <nav class="controls">
                    <RecordButton active={recording_active}
                                  onclick={ctx.link().callback(|_| Msg::ToggleRecording)} />
                    <HangUpButton onclick={ctx.link().callback(|_| Msg::HangUp)} />
                </nav>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(video) = self.local_preview.cast::<HtmlVideoElement>() {
            video.set_src_object(Some(&ctx.props().stream));
            // Muted so the local microphone does not feed back.
            video.set_muted(true);
            if let Err(e) = video.play() {
                debug!("autoplay blocked: {e:?}");
            }
        }
        if let Some(canvas) = self.remote_canvas.cast::<HtmlCanvasElement>() {
            match SyntheticRemoteFeed::start(canvas) {
                Ok(feed) => self.remote_feed = Some(feed),
                Err(e) => error!("could not start remote feed: {e:?}"),
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the job discards in-flight fragments; dropping the feed
        // stops canvas repaints.
        self.recording = None;
        self.remote_feed = None;
        if let Some(video) = self.local_preview.cast::<HtmlVideoElement>() {
            video.set_src_object(None);
        }
    }
}
