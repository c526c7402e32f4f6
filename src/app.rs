//! App container and action dispatch.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::actions::Action;
use crate::backend::{GenerateError, Generator};
use crate::state::{AppState, Message};

/// Shown as the assistant reply when a generation request fails, whatever
/// the cause. The cause itself only goes to the log.
pub const FALLBACK_REPLY: &str = "Sorry, I am unable to connect to the AI at the moment.";

pub struct App {
    pub state: AppState,
    generator: Arc<dyn Generator + Send + Sync>,
    handle: Handle,
    /// Receiver for the single in-flight generation, polled once per tick.
    pending: Option<oneshot::Receiver<Result<String, GenerateError>>>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(generator: Arc<dyn Generator + Send + Sync>, handle: Handle) -> Self {
        Self {
            state: AppState::default(),
            generator,
            handle,
            pending: None,
            should_quit: false,
            tick: 0,
        }
    }

    /// Seed the greeting. Also the post-clear state.
    pub fn bootstrap(&mut self) {
        self.state
            .chat
            .messages
            .push(Message::assistant(crate::state::GREETING.to_string()));
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
                self.state.suggestions.visible = false;
            }
            Action::NewLine => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, '\n');
                self.state.input_cursor = pos + 1;
                self.state.suggestions.visible = false;
            }
            Action::Backspace => {
                if let Some(c) = self.state.input_buffer[..self.state.input_cursor]
                    .chars()
                    .next_back()
                {
                    self.state.input_cursor -= c.len_utf8();
                    self.state.input_buffer.remove(self.state.input_cursor);
                }
            }
            Action::CursorLeft => {
                if let Some(c) = self.state.input_buffer[..self.state.input_cursor]
                    .chars()
                    .next_back()
                {
                    self.state.input_cursor -= c.len_utf8();
                }
            }
            Action::CursorRight => {
                if let Some(c) = self.state.input_buffer[self.state.input_cursor..].chars().next() {
                    self.state.input_cursor += c.len_utf8();
                }
            }
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
            }
            Action::ClearChat => self.clear_chat(),
            Action::Submit => self.submit_input(),

            Action::ChatScrollPageUp => {
                let base = if self.state.chat.follow {
                    self.chat_line_total()
                } else {
                    self.state.chat.scroll
                };
                self.state.chat.follow = false;
                self.state.chat.scroll = base.saturating_sub(10);
            }
            Action::ChatScrollPageDown => {
                self.state.chat.scroll = self.state.chat.scroll.saturating_add(10);
                if self.state.chat.scroll >= self.chat_line_total() {
                    self.state.chat.follow = true;
                }
            }
            Action::ChatScrollBottom => self.state.chat.follow = true,

            Action::SuggestionUp => {
                let len = self.state.suggestions.items.len();
                if len > 0 {
                    self.state.suggestions.selected_index =
                        (self.state.suggestions.selected_index + len - 1) % len;
                }
            }
            Action::SuggestionDown => {
                let len = self.state.suggestions.items.len();
                if len > 0 {
                    self.state.suggestions.selected_index =
                        (self.state.suggestions.selected_index + 1) % len;
                }
            }
            Action::SuggestionSelect => self.select_suggestion(),
            Action::SuggestionsHide => self.state.suggestions.visible = false,
        }
    }

    /// Append the user message and hand the prompt to the generator off the
    /// UI thread. No-op on whitespace-only input or while a request is
    /// already in flight.
    fn submit_input(&mut self) {
        if self.state.composing {
            return;
        }
        let prompt = self.state.input_buffer.trim().to_string();
        if prompt.is_empty() {
            return;
        }

        self.state.input_buffer.clear();
        self.state.input_cursor = 0;
        self.state.suggestions.visible = false;

        self.state.chat.messages.push(Message::user(prompt.clone()));
        self.state.chat.follow = true;
        self.state.composing = true;

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);
        let generator = Arc::clone(&self.generator);
        self.handle.spawn_blocking(move || {
            let _ = tx.send(generator.generate(&prompt));
        });
    }

    /// Called once per tick: if the in-flight generation resolved, append
    /// the reply (or the apology) and release the composing state. Every
    /// branch that consumes the receiver clears `composing`.
    pub fn poll_reply(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let text = match rx.try_recv() {
            Err(oneshot::error::TryRecvError::Empty) => return,
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "generation request failed");
                FALLBACK_REPLY.to_string()
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::warn!("generation worker dropped without replying");
                FALLBACK_REPLY.to_string()
            }
        };
        self.pending = None;
        self.state.composing = false;
        self.state.chat.messages.push(Message::assistant(text));
        self.state.chat.follow = true;
    }

    fn clear_chat(&mut self) {
        self.state.chat.messages.clear();
        self.bootstrap();
        self.state.chat.scroll = 0;
        self.state.chat.follow = true;
        self.state.suggestions.visible = true;
        self.state.suggestions.selected_index = 0;
    }

    fn select_suggestion(&mut self) {
        if let Some(chip) = self.state.suggestions.selected() {
            self.state.input_buffer = chip.prompt.to_string();
            self.state.input_cursor = self.state.input_buffer.len();
            self.state.suggestions.visible = false;
        }
    }

    /// Rough line count of the rendered chat, for page scrolling. The +1
    /// is the blank gap line between messages.
    fn chat_line_total(&self) -> usize {
        self.state
            .chat
            .messages
            .iter()
            .map(|m| m.text.lines().count().max(1) + 1)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{GenerateError, Generator};
    use crate::state::{Sender, GREETING, SUGGESTIONS};
    use reqwest::StatusCode;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    struct StubGenerator(Result<&'static str, ()>);

    impl Generator for StubGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(GenerateError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }

    /// Blocks inside `generate` until the test sends on the gate.
    struct GatedGenerator(Mutex<mpsc::Receiver<()>>);

    impl Generator for GatedGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.0.lock().expect("gate lock").recv().expect("gate");
            Ok("late reply".to_string())
        }
    }

    fn app_with(generator: impl Generator + Send + Sync + 'static) -> App {
        let mut app = App::new(Arc::new(generator), Handle::current());
        app.bootstrap();
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    fn wait_idle(app: &mut App) {
        for _ in 0..400 {
            app.poll_reply();
            if !app.state.composing {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("composing never released");
    }

    #[tokio::test]
    async fn whitespace_only_submit_is_a_no_op() {
        let mut app = app_with(StubGenerator(Ok("unused")));
        type_str(&mut app, "   ");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.chat.messages.len(), 1);
        assert!(!app.state.composing);
    }

    #[tokio::test]
    async fn successful_generation_appends_user_then_assistant() {
        let mut app = app_with(StubGenerator(Ok("echo")));
        type_str(&mut app, "hello");
        app.dispatch(Action::Submit);
        assert!(app.state.composing);
        assert!(app.state.input_buffer.is_empty());

        wait_idle(&mut app);
        let msgs = &app.state.chat.messages;
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].sender, Sender::User);
        assert_eq!(msgs[1].text, "hello");
        assert_eq!(msgs[2].sender, Sender::Assistant);
        assert_eq!(msgs[2].text, "echo");
    }

    #[tokio::test]
    async fn failed_generation_appends_the_apology_and_releases_composing() {
        let mut app = app_with(StubGenerator(Err(())));
        type_str(&mut app, "hello");
        app.dispatch(Action::Submit);

        wait_idle(&mut app);
        let last = app.state.chat.messages.last().expect("reply");
        assert_eq!(last.sender, Sender::Assistant);
        assert_eq!(last.text, FALLBACK_REPLY);
        assert!(!app.state.composing);
    }

    #[tokio::test]
    async fn second_submit_while_composing_is_ignored() {
        let (gate_tx, gate_rx) = mpsc::channel();
        let mut app = app_with(GatedGenerator(Mutex::new(gate_rx)));
        type_str(&mut app, "one");
        app.dispatch(Action::Submit);
        assert!(app.state.composing);

        type_str(&mut app, "two");
        app.dispatch(Action::Submit);
        // Still just greeting + first user message, and the typed text stays.
        assert_eq!(app.state.chat.messages.len(), 2);
        assert_eq!(app.state.input_buffer, "two");

        gate_tx.send(()).expect("release gate");
        wait_idle(&mut app);
        assert_eq!(app.state.chat.messages.len(), 3);
        assert_eq!(app.state.chat.messages[2].text, "late reply");
    }

    #[tokio::test]
    async fn clear_chat_reseeds_the_greeting_and_reshows_suggestions() {
        let mut app = app_with(StubGenerator(Ok("echo")));
        type_str(&mut app, "hello");
        app.dispatch(Action::Submit);
        wait_idle(&mut app);
        assert!(!app.state.suggestions.visible);

        app.dispatch(Action::ClearChat);
        assert_eq!(app.state.chat.messages.len(), 1);
        assert_eq!(app.state.chat.messages[0].text, GREETING);
        assert_eq!(app.state.chat.messages[0].sender, Sender::Assistant);
        assert!(app.state.suggestions.visible);
    }

    #[tokio::test]
    async fn selecting_a_suggestion_prefills_the_input_and_hides_the_list() {
        let mut app = app_with(StubGenerator(Ok("unused")));
        app.dispatch(Action::SuggestionDown);
        app.dispatch(Action::SuggestionSelect);
        assert_eq!(app.state.input_buffer, SUGGESTIONS[1].prompt);
        assert_eq!(app.state.input_cursor, app.state.input_buffer.len());
        assert!(!app.state.suggestions.visible);
    }

    #[tokio::test]
    async fn typing_hides_the_suggestions() {
        let mut app = app_with(StubGenerator(Ok("unused")));
        assert!(app.state.suggestions.visible);
        app.dispatch(Action::Char('x'));
        assert!(!app.state.suggestions.visible);
    }

    #[tokio::test]
    async fn cursor_and_backspace_respect_char_boundaries() {
        let mut app = app_with(StubGenerator(Ok("unused")));
        type_str(&mut app, "aé");
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.input_buffer, "a");
        app.dispatch(Action::CursorLeft);
        assert_eq!(app.state.input_cursor, 0);
        app.dispatch(Action::CursorRight);
        assert_eq!(app.state.input_cursor, 1);
    }
}
