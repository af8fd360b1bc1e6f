//! Photo acquisition via a capture device.
//!
//! The camera is modeled as an owned resource: [`CaptureBackend`] acquires
//! a [`CameraStream`] from explicit constraints and [`CameraSession`]
//! enforces the single-owner invariant (at most one live stream, released
//! on cancel, capture, switch and teardown). The shipped backend drives
//! the `ffmpeg` binary against V4L2 device nodes; tests script an
//! in-memory backend from [`testing`].

mod backend;
mod ffmpeg;
mod session;
pub mod testing;
mod types;

pub use backend::{CameraStream, CaptureBackend};
pub use ffmpeg::FfmpegBackend;
pub use session::CameraSession;
pub use types::{
    CameraCmd, CameraEvent, CaptureError, Facing, ImageBlob, OpenError, Permission,
    StreamConstraints,
};
