//! Image upload to the hosting service.
//!
//! Both acquisition paths (file pick and camera capture) funnel their
//! [`ImageBlob`] through [`upload_image`]: a size pre-check that never
//! touches the network, then a single multipart POST against a
//! Cloudinary-style unsigned upload endpoint. The response is JSON and a
//! `secure_url` field signals success; anything else is a generic remote
//! failure with no automatic retry.

use std::path::Path;

use serde_json::Value;

use crate::camera::ImageBlob;
use crate::settings::Settings;

/// Largest accepted upload, checked before any network call.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Account identifier the original deployment ships with.
const DEFAULT_CLOUD_NAME: &str = "dqjz4xwfg";
/// Pre-registered unsigned upload profile.
const DEFAULT_UPLOAD_PRESET: &str = "delivery_images";

/// Image-host endpoint parameters.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Account identifier on the image host.
    pub cloud_name: String,
    /// Unsigned upload profile identifier.
    pub upload_preset: String,
}

impl UploadConfig {
    /// Build the config from settings-file overrides, falling back to the
    /// shipped defaults.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cloud_name: settings
                .upload
                .cloud_name
                .clone()
                .unwrap_or_else(|| DEFAULT_CLOUD_NAME.to_string()),
            upload_preset: settings
                .upload
                .upload_preset
                .clone()
                .unwrap_or_else(|| DEFAULT_UPLOAD_PRESET.to_string()),
        }
    }

    /// Full upload endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Upload failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The blob exceeds [`MAX_UPLOAD_BYTES`]; no network call was made.
    TooLarge,
    /// Network, parse or missing-URL failure from the remote call.
    Remote(String),
}

impl UploadError {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::TooLarge => "errorMessages.fileTooLarge",
            Self::Remote(_) => "errorMessages.uploadFailed",
        }
    }
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge => write!(f, "file exceeds {MAX_UPLOAD_BYTES} bytes"),
            Self::Remote(reason) => write!(f, "upload failed: {reason}"),
        }
    }
}

/// A queued upload, tagged with the originating form generation so late
/// completions after a reset are dropped.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Form generation the request belongs to.
    pub generation: u64,
    /// Image to upload.
    pub blob: ImageBlob,
}

/// Worker answer for one [`UploadRequest`].
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Echoed form generation.
    pub generation: u64,
    /// Secure URL on success.
    pub result: Result<String, UploadError>,
}

/// What: Reject oversized blobs before any network traffic.
///
/// # Errors
/// - [`UploadError::TooLarge`] when the blob exceeds [`MAX_UPLOAD_BYTES`]
pub fn precheck(blob: &ImageBlob) -> Result<(), UploadError> {
    if blob.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// What: Pull the secure URL out of an upload response body.
#[must_use]
pub fn extract_secure_url(value: &Value) -> Option<String> {
    value
        .get("secure_url")
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
}

/// What: Upload an image blob to the hosting service.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `config`: Endpoint parameters
/// - `blob`: Image to upload
///
/// Output:
/// - The hosted secure URL
///
/// # Errors
/// - [`UploadError::TooLarge`] from the pre-check, before any network call
/// - [`UploadError::Remote`] on transport, parse or missing-URL failures
pub async fn upload_image(
    client: &reqwest::Client,
    config: &UploadConfig,
    blob: ImageBlob,
) -> Result<String, UploadError> {
    precheck(&blob)?;

    let part = reqwest::multipart::Part::bytes(blob.bytes)
        .file_name(blob.file_name.clone())
        .mime_str(&blob.mime)
        .map_err(|e| UploadError::Remote(format!("invalid mime type: {e}")))?;
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("upload_preset", config.upload_preset.clone());

    let response = client
        .post(config.endpoint())
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Remote(format!("request failed: {e}")))?;

    let body: Value = response
        .json()
        .await
        .map_err(|e| UploadError::Remote(format!("invalid response body: {e}")))?;

    extract_secure_url(&body)
        .ok_or_else(|| UploadError::Remote("response missing secure_url".to_string()))
}

/// What: Read an image file from disk for the file-pick path.
///
/// Inputs:
/// - `path`: File the user selected
///
/// Output:
/// - The blob with a MIME type guessed from the extension
///
/// # Errors
/// - A readable reason string when the file cannot be read
pub fn read_image_file(path: &Path) -> Result<ImageBlob, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let file_name = path
        .file_name()
        .map_or_else(|| "photo".to_string(), |n| n.to_string_lossy().to_string());
    Ok(ImageBlob {
        mime: guess_mime(path).to_string(),
        bytes,
        file_name,
    })
}

/// Guess the MIME type from a file extension.
fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_of(len: usize) -> ImageBlob {
        ImageBlob {
            bytes: vec![0u8; len],
            mime: "image/jpeg".to_string(),
            file_name: "photo.jpg".to_string(),
        }
    }

    #[test]
    /// What: The size pre-check accepts exactly 10 MiB and rejects one more
    fn upload_precheck_boundary() {
        assert_eq!(precheck(&blob_of(MAX_UPLOAD_BYTES)), Ok(()));
        assert_eq!(
            precheck(&blob_of(MAX_UPLOAD_BYTES + 1)),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn upload_extract_secure_url() {
        let ok = serde_json::json!({"secure_url": "https://img.example/a.jpg"});
        assert_eq!(
            extract_secure_url(&ok).as_deref(),
            Some("https://img.example/a.jpg")
        );
        let missing = serde_json::json!({"error": {"message": "nope"}});
        assert_eq!(extract_secure_url(&missing), None);
        let wrong_type = serde_json::json!({"secure_url": 42});
        assert_eq!(extract_secure_url(&wrong_type), None);
    }

    #[test]
    fn upload_config_endpoint_uses_cloud_name() {
        let config = UploadConfig {
            cloud_name: "acme".to_string(),
            upload_preset: "p".to_string(),
        };
        assert_eq!(
            config.endpoint(),
            "https://api.cloudinary.com/v1_1/acme/image/upload"
        );
        assert_eq!(UploadConfig::default().upload_preset, "delivery_images");
    }

    #[test]
    fn upload_error_message_keys() {
        assert_eq!(
            UploadError::TooLarge.message_key(),
            "errorMessages.fileTooLarge"
        );
        assert_eq!(
            UploadError::Remote("x".into()).message_key(),
            "errorMessages.uploadFailed"
        );
    }

    #[test]
    fn upload_guess_mime_from_extension() {
        assert_eq!(guess_mime(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("a.png")), "image/png");
        assert_eq!(guess_mime(Path::new("a")), "application/octet-stream");
    }
}
