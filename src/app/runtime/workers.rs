//! Background workers: terminal event reader, upload task, camera thread
//! and the periodic tick.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::camera::{CameraCmd, CameraEvent, CameraSession, FfmpegBackend};
use crate::settings::CameraSettings;
use crate::upload::{self, UploadConfig, UploadOutcome, UploadRequest};

/// What: Spawn the dedicated thread reading terminal events.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (test hook)
/// - `event_tx`: Channel toward the event loop
/// - `cancelled`: Flag polled for prompt shutdown
///
/// Details:
/// - Uses `poll` with a short timeout so the thread notices cancellation
///   and a closed channel without blocking in `read` forever.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// What: Spawn the upload worker task.
///
/// Inputs:
/// - `req_rx`: Queued upload requests
/// - `res_tx`: Results back to the event loop
/// - `config`: Image-host endpoint parameters
/// - `no_upload`: Replace the network call with a placeholder URL
///
/// Details:
/// - One shared HTTP client serves every request. Requests are processed
///   strictly in order; there is no retry and no cancellation of an
///   in-flight upload, its result simply arrives whenever it resolves.
pub fn spawn_upload_worker(
    mut req_rx: mpsc::UnboundedReceiver<UploadRequest>,
    res_tx: mpsc::UnboundedSender<UploadOutcome>,
    config: UploadConfig,
    no_upload: bool,
) {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        while let Some(req) = req_rx.recv().await {
            let generation = req.generation;
            let result = if no_upload {
                upload::precheck(&req.blob)
                    .map(|()| format!("https://dry-run.invalid/{}", req.blob.file_name))
            } else {
                upload::upload_image(&client, &config, req.blob).await
            };
            match &result {
                Ok(url) => tracing::info!(url = %url, "image uploaded"),
                Err(e) => tracing::warn!(error = %e, "image upload failed"),
            }
            if res_tx.send(UploadOutcome { generation, result }).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the camera worker thread owning the capture session.
///
/// Inputs:
/// - `cmd_rx`: Commands from the event handlers
/// - `evt_tx`: Events back to the event loop
/// - `settings`: Device node overrides
///
/// Details:
/// - Runs on a plain thread because every session call shells out and
///   blocks. The session is dropped when the command channel closes,
///   which releases any open stream on application teardown.
pub fn spawn_camera_worker(
    mut cmd_rx: mpsc::UnboundedReceiver<CameraCmd>,
    evt_tx: mpsc::UnboundedSender<CameraEvent>,
    settings: CameraSettings,
) {
    std::thread::spawn(move || {
        let backend = FfmpegBackend::new(&settings);
        let mut session = CameraSession::new(backend);
        while let Some(cmd) = cmd_rx.blocking_recv() {
            let event = match cmd {
                CameraCmd::Open => open_event(session.open(), &session),
                CameraCmd::Switch => open_event(session.switch(), &session),
                CameraCmd::Capture => match session.capture() {
                    Ok(blob) => CameraEvent::Captured(blob),
                    Err(e) => CameraEvent::CaptureFailed(e),
                },
                CameraCmd::Cancel => {
                    session.cancel();
                    CameraEvent::Closed
                }
            };
            if evt_tx.send(event).is_err() {
                break;
            }
        }
    });
}

/// Map an open/switch result onto the wire event.
fn open_event(
    result: Result<(u32, u32), crate::camera::OpenError>,
    session: &CameraSession<FfmpegBackend>,
) -> CameraEvent {
    match result {
        Ok((width, height)) => CameraEvent::Opened {
            facing: session.facing(),
            width,
            height,
        },
        Err(e) => {
            tracing::debug!(error = %e, "camera open failed");
            CameraEvent::OpenFailed(e)
        }
    }
}

/// Spawn the periodic tick used for toast expiry and redraws.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(250));
        loop {
            ticker.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
