//! Key handling while the camera pane is open.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::camera::CameraCmd;
use crate::state::{AppState, CameraView};

/// What: Handle one key press while a stream is open or opening.
///
/// Details:
/// - Esc cancels from any camera state; capture and switch only apply to
///   a live stream. Capture is ignored while an upload is in flight so
///   the shared upload operation is never invoked twice concurrently.
pub(crate) fn handle_camera_keys(
    ke: &KeyEvent,
    app: &mut AppState,
    camera_cmd_tx: &mpsc::UnboundedSender<CameraCmd>,
) {
    match ke.code {
        KeyCode::Esc => {
            app.camera = CameraView::Closed;
            let _ = camera_cmd_tx.send(CameraCmd::Cancel);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if matches!(app.camera, CameraView::Live { .. }) && !app.uploading {
                let _ = camera_cmd_tx.send(CameraCmd::Capture);
            }
        }
        KeyCode::Char('s' | 'S') => {
            if matches!(app.camera, CameraView::Live { .. }) {
                app.camera = CameraView::Opening;
                let _ = camera_cmd_tx.send(CameraCmd::Switch);
            }
        }
        _ => {}
    }
}
