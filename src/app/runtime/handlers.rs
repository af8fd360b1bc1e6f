//! Channel message handlers driven by the event loop.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::camera::{CameraEvent, OpenError};
use crate::i18n;
use crate::state::{AppState, CameraView};
use crate::upload::{UploadOutcome, UploadRequest};

/// What: Apply one upload worker result to the state.
///
/// Details:
/// - Results from a previous form generation (the form was reset or the
///   user navigated on while the upload was in flight) are dropped; the
///   uploading flag is cleared in every other case, success or failure.
pub fn handle_upload_outcome(app: &mut AppState, outcome: UploadOutcome) {
    if outcome.generation != app.generation {
        tracing::debug!(
            got = outcome.generation,
            current = app.generation,
            "dropping stale upload result"
        );
        return;
    }
    app.uploading = false;
    match outcome.result {
        Ok(url) => {
            app.form.set_uploaded(url);
            app.inline_error = None;
            let message = i18n::t(app, "successMessages.imageUploaded");
            app.show_toast(message);
        }
        Err(e) => {
            app.inline_error = Some(i18n::t(app, e.message_key()));
        }
    }
}

/// What: Apply one camera worker event to the state.
///
/// Details:
/// - Open failures return the camera to idle and surface the localized
///   message for the failure class ("other" failures embed the raw
///   diagnostic). A captured frame closes the camera pane and feeds the
///   shared upload path; a failed capture leaves the pane live.
pub fn handle_camera_event(
    app: &mut AppState,
    evt: CameraEvent,
    upload_req_tx: &mpsc::UnboundedSender<UploadRequest>,
) {
    match evt {
        CameraEvent::Opened {
            facing,
            width,
            height,
        } => {
            app.camera = CameraView::Live {
                facing,
                width,
                height,
            };
            app.inline_error = None;
        }
        CameraEvent::OpenFailed(e) => {
            app.camera = CameraView::Closed;
            app.inline_error = Some(match &e {
                OpenError::Other(reason) => i18n::t_fmt1(app, e.message_key(), reason),
                _ => i18n::t(app, e.message_key()),
            });
        }
        CameraEvent::Captured(blob) => {
            app.camera = CameraView::Closed;
            crate::events::form::enqueue_upload(app, blob, upload_req_tx);
        }
        CameraEvent::CaptureFailed(e) => {
            app.inline_error = Some(i18n::t(app, e.message_key()));
        }
        CameraEvent::Closed => {
            app.camera = CameraView::Closed;
        }
    }
}

/// Expire the toast once its deadline passes.
pub fn handle_tick(app: &mut AppState) {
    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}
