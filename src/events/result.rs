//! Key handling for the QR result screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Handle one key press on the result screen.
///
/// Output:
/// - `true` when the user asked to quit
pub(crate) fn handle_result_keys(ke: &KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('n' | 'N') => {
            app.reset_form();
            false
        }
        KeyCode::Char('q' | 'Q') => true,
        _ => false,
    }
}
