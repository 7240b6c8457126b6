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

//! Synthetic stand-in for a remote participant's video.
//!
//! Paints a random fill plus caption onto the remote canvas at a fixed
//! cadence. Dropping the feed cancels the repaint interval, so hiding the
//! video panel stops frame production. A real transport could replace this
//! module without touching the view layer.

use gloo_timers::callback::Interval;
use log::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::constants::{REMOTE_FEED_FPS, REMOTE_FEED_HEIGHT, REMOTE_FEED_WIDTH};

const CAPTION: &str = "Stranger";

pub struct SyntheticRemoteFeed {
    _interval: Interval,
}

impl SyntheticRemoteFeed {
    /// Start painting frames onto `canvas`. Frames keep coming until the
    /// returned handle is dropped.
    pub fn start(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(REMOTE_FEED_WIDTH);
        canvas.set_height(REMOTE_FEED_HEIGHT);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .unchecked_into::<CanvasRenderingContext2d>();

        let interval = Interval::new(1_000 / REMOTE_FEED_FPS, move || paint_frame(&ctx));
        Ok(Self {
            _interval: interval,
        })
    }
}

fn paint_frame(ctx: &CanvasRenderingContext2d) {
    let color = format!("#{:06x}", (js_sys::Math::random() * 16_777_215.0) as u32);
    ctx.set_fill_style_str(&color);
    ctx.fill_rect(
        0.0,
        0.0,
        REMOTE_FEED_WIDTH as f64,
        REMOTE_FEED_HEIGHT as f64,
    );
    ctx.set_fill_style_str("white");
    ctx.set_font("48px Arial");
    if let Err(e) = ctx.fill_text(CAPTION, 200.0, 240.0) {
        error!("remote feed paint failed: {e:?}");
    }
}
