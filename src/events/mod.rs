//! Event handling layer for qrdrop's TUI.
//!
//! `handle_event` dispatches one terminal event: modals first, then global
//! shortcuts, then camera-control keys while a stream is open (or
//! opening), then the focused screen. All state changes happen on the
//! event loop; the handlers only send commands to the upload and camera
//! workers.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::camera::CameraCmd;
use crate::state::{AppState, CameraView, Modal, Screen};
use crate::upload::UploadRequest;

pub(crate) mod camera;
pub(crate) mod form;
pub(crate) mod result;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the reader thread
/// - `app`: Application state
/// - `upload_req_tx`: Queue for upload requests
/// - `camera_cmd_tx`: Queue for camera worker commands
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    upload_req_tx: &mpsc::UnboundedSender<UploadRequest>,
    camera_cmd_tx: &mpsc::UnboundedSender<CameraCmd>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling
    if app.modal == Modal::Help {
        if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
            app.modal = Modal::None;
        }
        return false;
    }

    // Global shortcuts, regardless of focus
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('l') => {
                app.toggle_language();
                return false;
            }
            _ => {}
        }
    }
    if ke.code == KeyCode::F(1) {
        app.modal = Modal::Help;
        return false;
    }

    // Camera controls take precedence while a stream is open or opening
    if app.camera != CameraView::Closed {
        camera::handle_camera_keys(&ke, app, camera_cmd_tx);
        return false;
    }

    match app.screen {
        Screen::Form => form::handle_form_keys(&ke, app, upload_req_tx, camera_cmd_tx),
        Screen::Result => return result::handle_result_keys(&ke, app),
    }
    false
}
