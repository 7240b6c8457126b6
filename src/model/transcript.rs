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

//! Append-only log of the chat lines shown in the text panel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Local,
    Remote,
}

impl Sender {
    /// CSS class used when rendering an entry.
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::Local => "local",
            Sender::Remote => "remote",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
}

/// Ordered transcript of a single text session. Entries are appended in the
/// order their handlers ran; the whole value is dropped when the panel
/// closes, so nothing persists across sessions.
#[derive(Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a line from the simulated counterpart.
    pub fn push_remote(&mut self, text: impl Into<String>) {
        self.entries.push(ChatEntry {
            sender: Sender::Remote,
            text: text.into(),
        });
    }

    /// Append a line typed by the user. Input is trimmed first; empty and
    /// whitespace-only messages are rejected. Returns whether a line was
    /// appended.
    pub fn push_local(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.push(ChatEntry {
            sender: Sender::Local,
            text: text.to_string(),
        });
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
