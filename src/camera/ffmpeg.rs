//! V4L2 capture backend driving the `ffmpeg` binary.
//!
//! The binary is located with `which` at construction time; each open
//! probes the device's supported frame sizes and each capture runs a
//! single-frame grab to stdout. ffmpeg diagnostics on stderr are mapped
//! onto the open-failure taxonomy.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use crate::camera::backend::{CameraStream, CaptureBackend};
use crate::camera::types::{
    CaptureError, Facing, ImageBlob, OpenError, Permission, StreamConstraints,
};
use crate::settings::CameraSettings;

/// Default device node for the rear ("environment") direction.
const DEFAULT_ENVIRONMENT_DEVICE: &str = "/dev/video0";
/// Default device node for the front ("user") direction.
const DEFAULT_USER_DEVICE: &str = "/dev/video1";

/// Backend that shells out to `ffmpeg` for probing and capturing.
pub struct FfmpegBackend {
    /// Resolved ffmpeg binary, `None` when not installed.
    ffmpeg: Option<PathBuf>,
    /// Device node used for the rear direction.
    environment_device: PathBuf,
    /// Device node used for the front direction.
    user_device: PathBuf,
}

impl FfmpegBackend {
    /// Build a backend from the settings file overrides.
    #[must_use]
    pub fn new(settings: &CameraSettings) -> Self {
        let ffmpeg = which::which("ffmpeg").ok();
        if ffmpeg.is_none() {
            tracing::warn!("ffmpeg not found in PATH; camera capture unavailable");
        }
        Self {
            ffmpeg,
            environment_device: settings
                .environment_device
                .as_deref()
                .unwrap_or(DEFAULT_ENVIRONMENT_DEVICE)
                .into(),
            user_device: settings
                .user_device
                .as_deref()
                .unwrap_or(DEFAULT_USER_DEVICE)
                .into(),
        }
    }

    /// What: Resolve the device node for the requested constraints.
    ///
    /// Details:
    /// - A concrete facing maps to its configured node. Relaxed
    ///   constraints take the first node that exists among the configured
    ///   pair and `/dev/video0`..`/dev/video9`.
    fn device_for(&self, constraints: &StreamConstraints) -> Option<PathBuf> {
        match constraints.facing {
            Some(Facing::Environment) => Some(self.environment_device.clone()),
            Some(Facing::User) => Some(self.user_device.clone()),
            None => {
                let mut candidates =
                    vec![self.environment_device.clone(), self.user_device.clone()];
                for n in 0..10 {
                    candidates.push(PathBuf::from(format!("/dev/video{n}")));
                }
                candidates.into_iter().find(|p| p.exists())
            }
        }
    }
}

impl CaptureBackend for FfmpegBackend {
    fn permission(&self) -> Permission {
        // V4L2 has no separate grant registry; readability of the node is
        // the closest queryable signal.
        let device = &self.environment_device;
        if !device.exists() {
            return Permission::Unknown;
        }
        match std::fs::OpenOptions::new().read(true).open(device) {
            Ok(_) => Permission::Granted,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Permission::Denied,
            Err(_) => Permission::Unknown,
        }
    }

    fn open(
        &mut self,
        constraints: &StreamConstraints,
    ) -> Result<Box<dyn CameraStream>, OpenError> {
        let Some(ffmpeg) = self.ffmpeg.clone() else {
            return Err(OpenError::Other("ffmpeg not found in PATH".to_string()));
        };
        let Some(device) = self.device_for(constraints) else {
            return Err(OpenError::NotFound);
        };
        if constraints.facing.is_some() && !device.exists() {
            return Err(OpenError::NotFound);
        }

        let output = Command::new(&ffmpeg)
            .args(["-hide_banner", "-f", "v4l2", "-list_formats", "all", "-i"])
            .arg(&device)
            .output()
            .map_err(|e| OpenError::Other(format!("failed to run ffmpeg: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let sizes = parse_frame_sizes(&stderr);
        if sizes.is_empty() {
            return Err(classify_open_failure(&stderr));
        }
        let size = pick_size(&sizes, constraints.ideal_size);
        tracing::debug!(
            device = %device.display(),
            width = size.0,
            height = size.1,
            "camera device probed"
        );
        Ok(Box::new(FfmpegStream {
            ffmpeg,
            device,
            size,
            stopped: false,
        }))
    }
}

/// A probed device treated as a live stream; frames are grabbed on demand.
struct FfmpegStream {
    /// ffmpeg binary path.
    ffmpeg: PathBuf,
    /// Device node this stream is bound to.
    device: PathBuf,
    /// Negotiated frame size.
    size: (u32, u32),
    /// Set once released; captures afterwards are rejected.
    stopped: bool,
}

impl CameraStream for FfmpegStream {
    fn dimensions(&self) -> (u32, u32) {
        if self.stopped { (0, 0) } else { self.size }
    }

    fn capture_frame(&mut self) -> Result<ImageBlob, CaptureError> {
        if self.stopped {
            return Err(CaptureError::NotReady);
        }
        let video_size = format!("{}x{}", self.size.0, self.size.1);
        let output = Command::new(&self.ffmpeg)
            .args(["-hide_banner", "-loglevel", "error", "-f", "v4l2"])
            .args(["-video_size", &video_size, "-i"])
            .arg(&self.device)
            .args(["-frames:v", "1", "-f", "mjpeg", "pipe:1"])
            .output()
            .map_err(|e| CaptureError::Other(format!("failed to run ffmpeg: {e}")))?;

        if output.stdout.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("empty capture output")
                .trim()
                .to_string();
            return Err(CaptureError::Other(reason));
        }
        Ok(ImageBlob {
            bytes: output.stdout,
            mime: "image/jpeg".to_string(),
            file_name: "camera-photo.jpg".to_string(),
        })
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// What: Extract `WxH` frame-size tokens from ffmpeg's format listing.
///
/// Inputs:
/// - `stderr`: Raw ffmpeg stderr text
///
/// Output:
/// - All plausible sizes found, in listing order
fn parse_frame_sizes(stderr: &str) -> Vec<(u32, u32)> {
    let mut sizes = Vec::new();
    for raw in stderr.split(|c: char| c.is_whitespace() || c == '{' || c == '}' || c == ',') {
        if let Some((w, h)) = raw.split_once('x')
            && let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>())
            && (1..10_000).contains(&w)
            && (1..10_000).contains(&h)
        {
            sizes.push((w, h));
        }
    }
    sizes
}

/// What: Choose the frame size closest to the ideal request.
///
/// Details:
/// - Prefers the largest size fitting inside the ideal box; without a fit
///   (or without an ideal) the largest supported size wins.
fn pick_size(sizes: &[(u32, u32)], ideal: Option<(u32, u32)>) -> (u32, u32) {
    let area = |&(w, h): &(u32, u32)| u64::from(w) * u64::from(h);
    if let Some((iw, ih)) = ideal
        && let Some(best) = sizes
            .iter()
            .filter(|&&(w, h)| w <= iw && h <= ih)
            .max_by_key(|s| area(s))
    {
        return *best;
    }
    sizes
        .iter()
        .max_by_key(|s| area(s))
        .copied()
        .unwrap_or((0, 0))
}

/// What: Map ffmpeg stderr diagnostics onto the open-failure taxonomy.
fn classify_open_failure(stderr: &str) -> OpenError {
    let lower = stderr.to_lowercase();
    if lower.contains("permission denied") || lower.contains("operation not permitted") {
        OpenError::PermissionDenied
    } else if lower.contains("no such file or directory")
        || lower.contains("no such device")
        || lower.contains("cannot find a proper format")
    {
        OpenError::NotFound
    } else if lower.contains("device or resource busy") || lower.contains("resource busy") {
        OpenError::Busy
    } else if lower.contains("invalid argument")
        || lower.contains("inappropriate ioctl")
        || lower.contains("not a video capture device")
    {
        OpenError::Unsatisfiable
    } else {
        let reason = stderr
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("unknown ffmpeg failure")
            .trim()
            .to_string();
        OpenError::Other(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffmpeg_parse_frame_sizes_from_listing() {
        let stderr = "\
[video4linux2,v4l2 @ 0x5] Raw       :     yuyv422 :           YUYV 4:2:2 : 640x480 1280x720
[video4linux2,v4l2 @ 0x5] Compressed:       mjpeg :          Motion-JPEG : 640x480 1920x1080
";
        let sizes = parse_frame_sizes(stderr);
        assert!(sizes.contains(&(640, 480)));
        assert!(sizes.contains(&(1280, 720)));
        assert!(sizes.contains(&(1920, 1080)));
    }

    #[test]
    fn ffmpeg_parse_frame_sizes_ignores_noise() {
        let sizes = parse_frame_sizes("0x55f 123xabc x480 hex 0x0");
        assert!(sizes.is_empty());
    }

    #[test]
    /// What: Size selection honors the ideal box with a fallback
    ///
    /// - Input: Mixed size list with and without an ideal request
    /// - Output: Largest fitting size, or largest overall
    fn ffmpeg_pick_size_prefers_fit_inside_ideal() {
        let sizes = vec![(640, 480), (1280, 720), (1920, 1080)];
        assert_eq!(pick_size(&sizes, Some((1280, 720))), (1280, 720));
        assert_eq!(pick_size(&sizes, Some((800, 600))), (640, 480));
        assert_eq!(pick_size(&sizes, Some((320, 240))), (1920, 1080));
        assert_eq!(pick_size(&sizes, None), (1920, 1080));
    }

    #[test]
    fn ffmpeg_classify_maps_known_diagnostics() {
        assert_eq!(
            classify_open_failure("/dev/video0: Permission denied"),
            OpenError::PermissionDenied
        );
        assert_eq!(
            classify_open_failure("/dev/video7: No such file or directory"),
            OpenError::NotFound
        );
        assert_eq!(
            classify_open_failure("/dev/video0: Device or resource busy"),
            OpenError::Busy
        );
        assert_eq!(
            classify_open_failure("ioctl(VIDIOC_G_FMT): Invalid argument"),
            OpenError::Unsatisfiable
        );
        assert!(matches!(
            classify_open_failure("something exploded"),
            OpenError::Other(_)
        ));
    }
}
