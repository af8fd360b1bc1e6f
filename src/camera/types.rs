//! Value types shared by the camera backends, the session state machine
//! and the runtime worker.

/// Facing direction of the requested camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Rear sensor (the default).
    Environment,
    /// Front sensor.
    User,
}

impl Facing {
    /// Return the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Environment => Self::User,
            Self::User => Self::Environment,
        }
    }

    /// Translation key for the human-readable direction name.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Environment => "camera.facingEnvironment",
            Self::User => "camera.facingUser",
        }
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self::Environment
    }
}

/// Constraints passed to a backend when acquiring a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    /// Preferred facing direction; `None` means "any available device".
    pub facing: Option<Facing>,
    /// Preferred (ideal, not mandatory) resolution.
    pub ideal_size: Option<(u32, u32)>,
}

impl StreamConstraints {
    /// Preferred constraints: requested facing at 1280x720.
    #[must_use]
    pub const fn preferred(facing: Facing) -> Self {
        Self {
            facing: Some(facing),
            ideal_size: Some((1280, 720)),
        }
    }

    /// Minimal constraints used for the one retry after an
    /// unsatisfiable-constraints failure: any device, any resolution.
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            facing: None,
            ideal_size: None,
        }
    }
}

/// Result of the optional permission probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Access is known to be allowed.
    Granted,
    /// Access is known to be blocked; the device must not be opened.
    Denied,
    /// The platform cannot answer; proceed as if granted.
    Unknown,
}

/// A captured or file-loaded image ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlob {
    /// Raw encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`.
    pub mime: String,
    /// File name reported to the image host.
    pub file_name: String,
}

/// Failure taxonomy for opening a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The permission probe reported the capability as blocked.
    Blocked,
    /// The device rejected access at acquisition time.
    PermissionDenied,
    /// No capture device is present.
    NotFound,
    /// The device is held by another process or unreadable.
    Busy,
    /// The requested constraints cannot be satisfied; the session retries
    /// once with [`StreamConstraints::relaxed`] before surfacing
    /// [`OpenError::NotCompatible`].
    Unsatisfiable,
    /// The relaxed retry also failed.
    NotCompatible,
    /// Anything else; carries the underlying diagnostic.
    Other(String),
}

impl OpenError {
    /// Translation key for the user-facing message.
    ///
    /// [`OpenError::Other`] uses a `{}` placeholder for the diagnostic.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Blocked => "errorMessages.cameraBlocked",
            Self::PermissionDenied => "errorMessages.cameraPermissionDenied",
            Self::NotFound => "errorMessages.cameraNotFound",
            Self::Busy => "errorMessages.cameraBusy",
            Self::Unsatisfiable | Self::NotCompatible => "errorMessages.cameraNotCompatible",
            Self::Other(_) => "errorMessages.cameraError",
        }
    }
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked => write!(f, "camera access blocked"),
            Self::PermissionDenied => write!(f, "camera permission denied"),
            Self::NotFound => write!(f, "no camera device found"),
            Self::Busy => write!(f, "camera device busy"),
            Self::Unsatisfiable => write!(f, "camera constraints unsatisfiable"),
            Self::NotCompatible => write!(f, "camera not compatible"),
            Self::Other(reason) => write!(f, "camera error: {reason}"),
        }
    }
}

/// Failure taxonomy for capturing a still frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The stream reports zero dimensions (or is gone); nothing captured.
    NotReady,
    /// The capture itself failed; carries the underlying diagnostic.
    Other(String),
}

impl CaptureError {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        "errorMessages.captureError"
    }
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady => write!(f, "video stream not ready"),
            Self::Other(reason) => write!(f, "capture failed: {reason}"),
        }
    }
}

/// Commands sent from the event handlers to the camera worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCmd {
    /// Open a stream with the session's current facing direction.
    Open,
    /// Toggle facing and reopen.
    Switch,
    /// Freeze the current frame into a still image.
    Capture,
    /// Release the stream and return to idle.
    Cancel,
}

/// Events sent from the camera worker back to the event loop.
#[derive(Debug, Clone)]
pub enum CameraEvent {
    /// A stream is live and bound.
    Opened {
        /// Active facing direction.
        facing: Facing,
        /// Native stream width.
        width: u32,
        /// Native stream height.
        height: u32,
    },
    /// Opening (or switching) failed; the session is idle again.
    OpenFailed(OpenError),
    /// A frame was captured; the stream has been released.
    Captured(ImageBlob),
    /// Capturing failed; the stream is still live.
    CaptureFailed(CaptureError),
    /// The stream was released after a cancel.
    Closed,
}
