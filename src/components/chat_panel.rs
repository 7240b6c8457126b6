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

//! Text chat panel: transcript, input, and the simulated counterpart.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::constants::CHAT_GREETING;
use crate::model::reply_scheduler::ReplyScheduler;
use crate::model::transcript::Transcript;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub on_leave: Callback<()>,
}

pub enum Msg {
    Send,
    CannedReply(&'static str),
    Leave,
}

pub struct ChatPanel {
    transcript: Transcript,
    input: NodeRef,
    output: NodeRef,
    // Kept alive for the lifetime of the panel; dropping it cancels the
    // reply timer.
    _scheduler: ReplyScheduler,
}

impl Component for ChatPanel {
    type Message = Msg;
    type Properties = ChatPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_remote(CHAT_GREETING);
        let scheduler = ReplyScheduler::start(ctx.link().callback(Msg::CannedReply));
        Self {
            transcript,
            input: NodeRef::default(),
            output: NodeRef::default(),
            _scheduler: scheduler,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Send => {
                let Some(input) = self.input.cast::<HtmlInputElement>() else {
                    return false;
                };
                let appended = self.transcript.push_local(&input.value());
                if appended {
                    input.set_value("");
                }
                let _ = input.focus();
                appended
            }
            Msg::CannedReply(text) => {
                self.transcript.push_remote(text);
                true
            }
            Msg::Leave => {
                ctx.props().on_leave.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onkeydown = ctx
            .link()
            .batch_callback(|event: KeyboardEvent| (event.key() == "Enter").then_some(Msg::Send));
        html! {
            <div class="panel chat-panel" id="text-chat">
                <div class="chat-output" id="chat-output" ref={self.output.clone()}>
                    { for self.transcript.entries().iter().map(|entry| html! {
                        <p class={classes!("msg", entry.sender.css_class())}>{ &entry.text }</p>
                    }) }
                </div>
                <div class="chat-controls">
                    <input id="chat-input" type="text" placeholder="Say something..."
                           ref={self.input.clone()} {onkeydown} />
                    <button class="chat-btn" id="send-btn"
                            onclick={ctx.link().callback(|_| Msg::Send)}>
                        { "Send" }
                    </button>
                    <button class="chat-btn danger" id="leave-btn"
                            onclick={ctx.link().callback(|_| Msg::Leave)}>
                        { "Leave" }
                    </button>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(input) = self.input.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
        // Keep the newest line in view.
        if let Some(output) = self.output.cast::<web_sys::Element>() {
            output.set_scroll_top(output.scroll_height());
        }
    }
}
