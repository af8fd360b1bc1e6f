//! Channel definitions for runtime communication between the event loop
//! and the background workers.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::camera::{CameraCmd, CameraEvent};
use crate::upload::{UploadOutcome, UploadRequest};

/// All channel endpoints used by the runtime.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Loop-side receiver for terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Signals the reader thread to exit.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Upload requests toward the upload worker.
    pub upload_req_tx: mpsc::UnboundedSender<UploadRequest>,
    /// Worker-side receiver, taken once when the worker spawns.
    upload_req_rx: Option<mpsc::UnboundedReceiver<UploadRequest>>,
    /// Upload results toward the loop.
    pub upload_res_tx: mpsc::UnboundedSender<UploadOutcome>,
    /// Loop-side receiver for upload results.
    pub upload_res_rx: mpsc::UnboundedReceiver<UploadOutcome>,
    /// Camera commands toward the camera worker.
    pub camera_cmd_tx: mpsc::UnboundedSender<CameraCmd>,
    /// Worker-side receiver, taken once when the worker spawns.
    camera_cmd_rx: Option<mpsc::UnboundedReceiver<CameraCmd>>,
    /// Camera events toward the loop.
    pub camera_evt_tx: mpsc::UnboundedSender<CameraEvent>,
    /// Loop-side receiver for camera events.
    pub camera_evt_rx: mpsc::UnboundedReceiver<CameraEvent>,
    /// Periodic redraw/expiry ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Loop-side receiver for ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all channel pairs.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (upload_req_tx, upload_req_rx) = mpsc::unbounded_channel();
        let (upload_res_tx, upload_res_rx) = mpsc::unbounded_channel();
        let (camera_cmd_tx, camera_cmd_rx) = mpsc::unbounded_channel();
        let (camera_evt_tx, camera_evt_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            upload_req_tx,
            upload_req_rx: Some(upload_req_rx),
            upload_res_tx,
            upload_res_rx,
            camera_cmd_tx,
            camera_cmd_rx: Some(camera_cmd_rx),
            camera_evt_tx,
            camera_evt_rx,
            tick_tx,
            tick_rx,
        }
    }

    /// Hand the upload request receiver to its worker (once).
    pub fn take_upload_req_rx(&mut self) -> Option<mpsc::UnboundedReceiver<UploadRequest>> {
        self.upload_req_rx.take()
    }

    /// Hand the camera command receiver to its worker (once).
    pub fn take_camera_cmd_rx(&mut self) -> Option<mpsc::UnboundedReceiver<CameraCmd>> {
        self.camera_cmd_rx.take()
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
