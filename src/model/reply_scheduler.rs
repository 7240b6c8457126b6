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

//! Timer-driven injection of simulated counterpart messages.

use gloo_timers::callback::Interval;
use yew::prelude::Callback;

use crate::constants::{
    pick_reply, REPLY_PERIOD_JITTER_MS, REPLY_PERIOD_MIN_MS, REPLY_PROBABILITY,
};

/// Recurring timer that, while alive, occasionally emits one canned reply.
/// The period is picked once per scheduler within the configured bounds, so
/// each chat session has its own rhythm. Dropping the scheduler cancels the
/// timer; no tick can fire after the owning panel goes away.
pub struct ReplyScheduler {
    _interval: Interval,
}

impl ReplyScheduler {
    pub fn start(on_reply: Callback<&'static str>) -> Self {
        Self::start_with_period(period_ms(js_sys::Math::random()), on_reply)
    }

    /// Start with an explicit tick period instead of a sampled one. Tests
    /// use this to observe ticks without multi-second waits.
    pub fn start_with_period(period_ms: u32, on_reply: Callback<&'static str>) -> Self {
        let interval = Interval::new(period_ms, move || {
            if js_sys::Math::random() < REPLY_PROBABILITY {
                on_reply.emit(pick_reply(js_sys::Math::random()));
            }
        });
        Self {
            _interval: interval,
        }
    }
}

/// Map a uniform sample in `[0, 1)` onto the tick period.
fn period_ms(sample: f64) -> u32 {
    REPLY_PERIOD_MIN_MS + (sample * REPLY_PERIOD_JITTER_MS as f64) as u32
}
