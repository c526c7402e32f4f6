//! UI layer: layout, theme, formatting, renderer, widgets.

mod format;
mod layout;
mod renderer;
mod theme;

pub mod widgets;

pub use renderer::render;
