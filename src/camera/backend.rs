//! Capture backend traits.
//!
//! The platform camera is modeled as an owned resource: a backend acquires
//! a [`CameraStream`] from explicit constraints and every stream must be
//! released through [`CameraStream::stop`]. The session layer guarantees
//! at most one live stream per session; backends only have to make `stop`
//! actually release the device.

use crate::camera::types::{CaptureError, ImageBlob, OpenError, Permission, StreamConstraints};

/// A live video stream bound to one device.
pub trait CameraStream: Send {
    /// Native stream dimensions; `(0, 0)` means "not ready yet".
    fn dimensions(&self) -> (u32, u32);

    /// Freeze the current frame into an encoded still image.
    ///
    /// # Errors
    /// - [`CaptureError::NotReady`] when the stream cannot produce a frame
    /// - [`CaptureError::Other`] with the underlying diagnostic otherwise
    fn capture_frame(&mut self) -> Result<ImageBlob, CaptureError>;

    /// Release the device. Must be idempotent and must stop every
    /// constituent track; the platform does not reclaim leaked streams.
    fn stop(&mut self);
}

/// Acquires streams from the platform.
pub trait CaptureBackend: Send {
    /// Probe the current camera permission.
    ///
    /// Platforms without a queryable permission state return
    /// [`Permission::Unknown`], which callers treat as granted.
    fn permission(&self) -> Permission;

    /// Open a stream matching `constraints`.
    ///
    /// # Errors
    /// Returns the [`OpenError`] taxonomy; in particular
    /// [`OpenError::Unsatisfiable`] signals that a retry with
    /// [`StreamConstraints::relaxed`] may succeed.
    fn open(&mut self, constraints: &StreamConstraints)
    -> Result<Box<dyn CameraStream>, OpenError>;
}
