//! Per-frame compose: header, chat, suggestions, input bar, status.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{
    render_chat, render_header, render_input, render_status, render_suggestions,
};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    let state = &app.state;

    let spinner_char = SPINNER[tick % SPINNER.len()];
    let input_height = layout::input_height(state.input_buffer(), area.width);
    let suggestion_rows = if state.suggestions.visible && !state.suggestions.items.is_empty() {
        state.suggestions.items.len() as u16 + 2
    } else {
        0
    };
    let regions = layout::compute(area, input_height, suggestion_rows);

    render_header(f, regions.header, &state.endpoint_label, state.offline);
    render_chat(f, &state.chat, regions.chat, state.composing, spinner_char);
    render_suggestions(f, &state.suggestions, regions.suggestions);
    render_input(
        f,
        state.input_buffer(),
        state.input_cursor(),
        regions.input,
    );
    render_status(f, regions.status, state.composing, spinner_char);
}
