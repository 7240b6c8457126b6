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

/// First line shown when a text session opens.
pub const CHAT_GREETING: &str = "Hey... connected.";

/// Lines the simulated counterpart can send while the text panel is open.
pub const CANNED_REPLIES: [&str; 10] = [
    "Hey what's up?",
    "Nice to meet you!",
    "Where you from?",
    "This is wild lol",
    "You look chill",
    "Wanna keep going?",
    "Haha yeah same",
    "What's your vibe?",
    "Random but cool",
    "I'm bored, talk to me",
];

/// Reply timer period bounds; one period is picked per chat session.
pub const REPLY_PERIOD_MIN_MS: u32 = 4_000;
pub const REPLY_PERIOD_JITTER_MS: u32 = 4_000;
/// Chance that a single reply timer tick emits a line.
pub const REPLY_PROBABILITY: f64 = 0.4;

pub const REMOTE_FEED_WIDTH: u32 = 640;
pub const REMOTE_FEED_HEIGHT: u32 = 480;
pub const REMOTE_FEED_FPS: u32 = 15;

pub const RECORDING_MIME_TYPE: &str = "video/webm";
pub const RECORDING_FILE_PREFIX: &str = "klypo-recording";

/// Map a uniform sample in `[0, 1)` onto one of the canned replies.
pub fn pick_reply(sample: f64) -> &'static str {
    let idx = (sample * CANNED_REPLIES.len() as f64) as usize;
    CANNED_REPLIES[idx.min(CANNED_REPLIES.len() - 1)]
}
