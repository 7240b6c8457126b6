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

//! Application root: panel visibility state machine and session ownership.
//!
//! Exactly one panel is visible at a time, and modes only change through
//! home. Entering video mode waits for the media grant before leaving home,
//! so a denial never produces a partial transition; leaving a mode tears its
//! resources down before home renders again.

use log::debug;
use web_sys::MediaStream;
use yew::prelude::*;

use super::chat_panel::ChatPanel;
use super::home::Home;
use super::video_panel::VideoPanel;
use crate::model::local_media::{request_local_media, LocalCapture};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Home,
    Video,
    Text,
}

pub enum Msg {
    StartVideo,
    StartText,
    MediaGranted(MediaStream),
    MediaDenied,
    LeaveToHome,
}

pub struct AppRoot {
    mode: Mode,
    capture: Option<LocalCapture>,
    /// A getUserMedia prompt is outstanding.
    connecting: bool,
    media_denied: bool,
}

impl Component for AppRoot {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: Mode::Home,
            capture: None,
            connecting: false,
            media_denied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match (self.mode, msg) {
            (Mode::Home, Msg::StartVideo) => {
                if self.connecting {
                    return false;
                }
                self.connecting = true;
                self.media_denied = false;
                request_local_media(
                    ctx.link().callback(Msg::MediaGranted),
                    ctx.link().callback(|_| Msg::MediaDenied),
                );
                true
            }
            (Mode::Home, Msg::MediaGranted(stream)) => {
                self.connecting = false;
                self.capture = Some(LocalCapture::new(stream));
                self.mode = Mode::Video;
                debug!("video session started");
                true
            }
            (_, Msg::MediaGranted(stream)) => {
                // Mode changed while the prompt was open; release right away.
                LocalCapture::new(stream).stop();
                self.connecting = false;
                false
            }
            (_, Msg::MediaDenied) => {
                self.connecting = false;
                self.media_denied = true;
                matches!(self.mode, Mode::Home)
            }
            (Mode::Home, Msg::StartText) => {
                if self.connecting {
                    return false;
                }
                self.mode = Mode::Text;
                true
            }
            (Mode::Video, Msg::LeaveToHome) => {
                if let Some(capture) = self.capture.take() {
                    capture.stop();
                }
                self.mode = Mode::Home;
                debug!("video session ended");
                true
            }
            (Mode::Text, Msg::LeaveToHome) => {
                self.mode = Mode::Home;
                true
            }
            // Re-entering the active mode, or leaving home, is a no-op.
            _ => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.mode {
            Mode::Home => html! {
                <Home
                    on_start_video={ctx.link().callback(|_| Msg::StartVideo)}
                    on_start_text={ctx.link().callback(|_| Msg::StartText)}
                    connecting={self.connecting}
                    media_denied={self.media_denied}
                />
            },
            // Video mode is only ever entered with a granted capture.
            Mode::Video => match self.capture.as_ref() {
                Some(capture) => html! {
                    <VideoPanel stream={capture.stream().clone()}
                                on_hang_up={ctx.link().callback(|_| Msg::LeaveToHome)} />
                },
                None => html! {},
            },
            Mode::Text => html! {
                <ChatPanel on_leave={ctx.link().callback(|_| Msg::LeaveToHome)} />
            },
        }
    }
}
