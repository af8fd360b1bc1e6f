//! Rendering layer: form screen, result screen and the help overlay.

use ratatui::{
    Frame,
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Modal, Screen};
use crate::theme::theme;

mod form;
mod modals;
mod result;

/// What: Render one frame of the UI.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match app.screen {
        Screen::Form => form::render_form(f, app, area),
        Screen::Result => result::render_result(f, app, area),
    }

    if app.modal == Modal::Help {
        modals::render_help(f, app, area);
    }
}
