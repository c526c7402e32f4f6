//! App state: chat history, input buffer, suggestion chips, composing flag.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Greeting seeded into the chat on startup and after a clear.
pub const GREETING: &str =
    "Hi! I'm Sidekick. Ask me anything — coding help, writing, explanations, and more.";

/// Counter turns amber above this many characters.
pub const COUNTER_WARN: usize = 1500;
/// Counter turns red above this many characters.
pub const COUNTER_ALERT: usize = 1800;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self { sender: Sender::User, text, timestamp: Local::now() }
    }
    pub fn assistant(text: String) -> Self {
        Self { sender: Sender::Assistant, text, timestamp: Local::now() }
    }
}

/// Chat: messages + scroll offset + stick-to-bottom flag.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub scroll: usize,
    /// When true the view tracks the latest message; manual scrolling clears it.
    pub follow: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: Vec::new(), scroll: 0, follow: true }
    }
}

/// One suggestion chip: short label, full canned prompt.
#[derive(Clone, Debug)]
pub struct Suggestion {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Chips shown under the chat until the user picks one or starts typing.
pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion { label: "Debug code", prompt: "Help me debug a piece of code I'm stuck on" },
    Suggestion { label: "Write a story", prompt: "Write a short creative story for me" },
    Suggestion { label: "Explain a topic", prompt: "Explain quantum computing in simple terms" },
    Suggestion { label: "Marketing ideas", prompt: "Brainstorm marketing ideas for a small startup" },
];

/// Suggestion list: visibility + selection over the fixed chip set.
#[derive(Clone, Debug)]
pub struct SuggestionState {
    pub visible: bool,
    pub items: &'static [Suggestion],
    pub selected_index: usize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self { visible: true, items: SUGGESTIONS, selected_index: 0 }
    }
}

impl SuggestionState {
    pub fn selected(&self) -> Option<&Suggestion> {
        self.items.get(self.selected_index)
    }
}

/// Visual level of the character counter. Purely a color cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warn,
    Alert,
}

pub fn counter_level(len: usize) -> CounterLevel {
    if len > COUNTER_ALERT {
        CounterLevel::Alert
    } else if len > COUNTER_WARN {
        CounterLevel::Warn
    } else {
        CounterLevel::Normal
    }
}

/// Global app state (single chat panel).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub chat: ChatState,
    pub input_buffer: String,
    /// Byte offset into `input_buffer`, always on a char boundary.
    pub input_cursor: usize,
    pub suggestions: SuggestionState,
    /// True while a generation request is in flight. Submit is a no-op
    /// until the pending request resolves.
    pub composing: bool,
    /// Shown in the header: endpoint URL, or the offline notice.
    pub endpoint_label: String,
    pub offline: bool,
}

impl AppState {
    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }

    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_thresholds_are_strict() {
        assert_eq!(counter_level(0), CounterLevel::Normal);
        assert_eq!(counter_level(1500), CounterLevel::Normal);
        assert_eq!(counter_level(1501), CounterLevel::Warn);
        assert_eq!(counter_level(1800), CounterLevel::Warn);
        assert_eq!(counter_level(1801), CounterLevel::Alert);
    }

    #[test]
    fn suggestions_start_visible_with_first_selected() {
        let s = SuggestionState::default();
        assert!(s.visible);
        assert_eq!(s.selected().unwrap().label, SUGGESTIONS[0].label);
    }
}
