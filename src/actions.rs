//! User actions dispatched against app state.

#[derive(Clone, Debug)]
pub enum Action {
    Quit,
    Char(char),
    NewLine,
    Backspace,
    CursorLeft,
    CursorRight,
    ClearInput,
    ClearChat,
    Submit,

    ChatScrollPageUp,
    ChatScrollPageDown,
    ChatScrollBottom,

    SuggestionUp,
    SuggestionDown,
    SuggestionSelect,
    SuggestionsHide,
}
