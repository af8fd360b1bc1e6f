//! Key handling for the form screen: field editing, photo acquisition
//! triggers and submission.

use std::path::Path;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::camera::{CameraCmd, ImageBlob};
use crate::i18n;
use crate::logic::{self, FieldKind};
use crate::state::{AppState, CameraView, FieldId, Screen};
use crate::upload::{self, UploadRequest};

/// What: Handle one key press while the form screen is focused.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
/// - `upload_req_tx`: Queue for upload requests
/// - `camera_cmd_tx`: Queue for camera worker commands
pub(crate) fn handle_form_keys(
    ke: &KeyEvent,
    app: &mut AppState,
    upload_req_tx: &mpsc::UnboundedSender<UploadRequest>,
    camera_cmd_tx: &mpsc::UnboundedSender<CameraCmd>,
) {
    let spec = logic::spec_for(app.form_kind);
    let field_count = spec.fields.len();
    let field = spec.fields[app.focus.min(field_count - 1)];

    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('s') => submit(app),
            KeyCode::Char('p') => open_camera(app, camera_cmd_tx),
            KeyCode::Char('r') => app.form.clear_photo(),
            _ => {}
        }
        return;
    }

    match ke.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus = (app.focus + 1) % field_count;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = (app.focus + field_count - 1) % field_count;
        }
        KeyCode::Enter => {
            if matches!(field.kind, FieldKind::Photo) {
                trigger_file_upload(app, upload_req_tx);
            } else {
                app.focus = (app.focus + 1) % field_count;
            }
        }
        KeyCode::Left => logic::cycle_select(&mut app.form, &field, -1),
        KeyCode::Right => logic::cycle_select(&mut app.form, &field, 1),
        KeyCode::Backspace => logic::apply_backspace(&mut app.form, &field),
        KeyCode::Char(ch) => logic::apply_char(&mut app.form, &field, ch),
        _ => {}
    }
}

/// What: Validate the form and, when clean, build the QR result.
///
/// Details:
/// - Ignored while an upload or another submit is in flight. On
///   validation failure the full error set replaces the previous one and
///   no payload is produced.
fn submit(app: &mut AppState) {
    if app.uploading || app.submitting {
        return;
    }
    app.submitting = true;

    let spec = logic::spec_for(app.form_kind);
    let errors = logic::validate(spec, &app.form);
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "submission blocked by validation");
        app.form.errors = errors;
        app.submitting = false;
        return;
    }
    app.form.errors.clear();

    match crate::qr::build_view(spec, &app.form, Utc::now()) {
        Ok(view) => {
            tracing::info!(id = %app.form.id, "QR record generated");
            app.qr = Some(view);
            app.screen = Screen::Result;
            app.inline_error = None;
        }
        Err(reason) => {
            tracing::warn!(error = %reason, "QR generation failed");
            app.inline_error = Some(i18n::t(app, "errorMessages.qrGenerationFailed"));
        }
    }
    app.submitting = false;
}

/// Request a camera stream; ignored while an upload is running.
fn open_camera(app: &mut AppState, camera_cmd_tx: &mpsc::UnboundedSender<CameraCmd>) {
    if app.uploading {
        return;
    }
    app.camera = CameraView::Opening;
    app.inline_error = None;
    let _ = camera_cmd_tx.send(CameraCmd::Open);
}

/// What: Read the file named in the photo field and queue its upload.
fn trigger_file_upload(app: &mut AppState, upload_req_tx: &mpsc::UnboundedSender<UploadRequest>) {
    if app.uploading {
        return;
    }
    let path_text = app.form.value(FieldId::Photo).trim().to_string();
    if path_text.is_empty() {
        return;
    }
    match upload::read_image_file(Path::new(&path_text)) {
        Ok(blob) => enqueue_upload(app, blob, upload_req_tx),
        Err(reason) => {
            tracing::debug!(path = %path_text, error = %reason, "photo file unreadable");
            app.inline_error = Some(i18n::t_fmt1(app, "errorMessages.fileUnreadable", reason));
        }
    }
}

/// What: Queue one blob for upload, shared by both acquisition paths.
///
/// Details:
/// - The size pre-check runs here, before the request ever reaches the
///   worker, so an oversized blob produces the localized error without
///   any network call. Accepted requests set the uploading flag and carry
///   the current form generation for the stale-result guard.
pub(crate) fn enqueue_upload(
    app: &mut AppState,
    blob: ImageBlob,
    upload_req_tx: &mpsc::UnboundedSender<UploadRequest>,
) {
    if let Err(e) = upload::precheck(&blob) {
        app.inline_error = Some(i18n::t(app, e.message_key()));
        return;
    }
    app.uploading = true;
    app.inline_error = None;
    let _ = upload_req_tx.send(UploadRequest {
        generation: app.generation,
        blob,
    });
}
