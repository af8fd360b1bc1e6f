//! The camera session state machine.
//!
//! Owns at most one live stream and funnels every acquisition and release
//! through one place so the single-stream invariant holds on all paths:
//! cancel, successful capture, facing switch and drop (teardown) all
//! release the stream; a failed capture leaves it live.

use crate::camera::backend::{CameraStream, CaptureBackend};
use crate::camera::types::{
    CaptureError, Facing, ImageBlob, OpenError, Permission, StreamConstraints,
};

/// Single-owner wrapper around a backend and its at-most-one live stream.
pub struct CameraSession<B: CaptureBackend> {
    /// Platform backend used for permission probes and stream acquisition.
    backend: B,
    /// The live stream, if any.
    stream: Option<Box<dyn CameraStream>>,
    /// Currently selected facing direction; survives open failures.
    facing: Facing,
}

impl<B: CaptureBackend> CameraSession<B> {
    /// Create an idle session preferring the rear camera.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stream: None,
            facing: Facing::default(),
        }
    }

    /// Currently selected facing direction.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Whether a stream is currently live.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.stream.is_some()
    }

    /// Native dimensions of the live stream, if any.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.stream.as_deref().map(CameraStream::dimensions)
    }

    /// What: Open a stream with the current facing direction.
    ///
    /// Output:
    /// - `Ok((width, height))` once the stream is live
    ///
    /// # Errors
    /// - [`OpenError::Blocked`] when the permission probe reports denial;
    ///   the device is never touched in that case
    /// - The open-failure taxonomy otherwise; an
    ///   [`OpenError::Unsatisfiable`] answer is retried once with relaxed
    ///   constraints and becomes [`OpenError::NotCompatible`] if the retry
    ///   also fails
    ///
    /// Details:
    /// - Any previously held stream is released before acquiring, so a
    ///   failed open always leaves the session idle with no stream.
    pub fn open(&mut self) -> Result<(u32, u32), OpenError> {
        self.release();

        if self.backend.permission() == Permission::Denied {
            tracing::debug!("camera permission probe reported denial");
            return Err(OpenError::Blocked);
        }

        match self.backend.open(&StreamConstraints::preferred(self.facing)) {
            Ok(stream) => Ok(self.bind(stream)),
            Err(OpenError::Unsatisfiable) => {
                tracing::debug!("constraints unsatisfiable, retrying relaxed");
                match self.backend.open(&StreamConstraints::relaxed()) {
                    Ok(stream) => Ok(self.bind(stream)),
                    Err(retry_err) => {
                        tracing::debug!(error = %retry_err, "relaxed retry failed");
                        Err(OpenError::NotCompatible)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// What: Toggle the facing direction and reopen.
    ///
    /// # Errors
    /// Same taxonomy as [`CameraSession::open`]; on failure the session is
    /// idle and keeps the new direction for the next attempt.
    pub fn switch(&mut self) -> Result<(u32, u32), OpenError> {
        self.facing = self.facing.toggled();
        self.open()
    }

    /// What: Freeze the current frame into a still image.
    ///
    /// Output:
    /// - The captured blob; the stream is released on success.
    ///
    /// # Errors
    /// - [`CaptureError::NotReady`] when no stream is live or it reports
    ///   zero dimensions; the stream (if any) stays open
    /// - [`CaptureError::Other`] when the backend capture fails; the
    ///   stream stays open
    pub fn capture(&mut self) -> Result<ImageBlob, CaptureError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(CaptureError::NotReady);
        };
        let (width, height) = stream.dimensions();
        if width == 0 || height == 0 {
            return Err(CaptureError::NotReady);
        }
        let blob = stream.capture_frame()?;
        self.release();
        Ok(blob)
    }

    /// Release the stream unconditionally (user cancel).
    pub fn cancel(&mut self) {
        self.release();
    }

    /// Bind a freshly acquired stream and report its dimensions.
    fn bind(&mut self, stream: Box<dyn CameraStream>) -> (u32, u32) {
        let dims = stream.dimensions();
        self.stream = Some(stream);
        tracing::debug!(width = dims.0, height = dims.1, "camera stream live");
        dims
    }

    /// Stop and drop the held stream, if any.
    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::debug!("camera stream released");
        }
    }
}

impl<B: CaptureBackend> Drop for CameraSession<B> {
    fn drop(&mut self) {
        self.release();
    }
}
