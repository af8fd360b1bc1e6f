//! Optional settings file for overriding the upload endpoint and capture
//! devices.
//!
//! The file lives at `<config_dir>/settings.conf` and is plain TOML:
//!
//! ```toml
//! [upload]
//! cloud_name = "my-cloud"
//! upload_preset = "my_preset"
//!
//! [camera]
//! environment_device = "/dev/video0"
//! user_device = "/dev/video1"
//! ```
//!
//! Everything is optional; a missing or unparsable file yields defaults.
//! The UI language is deliberately not persisted here.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Parsed settings file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Image-host overrides.
    #[serde(default)]
    pub upload: UploadSettings,
    /// Capture-device overrides.
    #[serde(default)]
    pub camera: CameraSettings,
}

/// Overrides for the image-hosting endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadSettings {
    /// Account identifier on the image host.
    pub cloud_name: Option<String>,
    /// Pre-registered unsigned upload profile.
    pub upload_preset: Option<String>,
}

/// Overrides for the V4L2 device nodes used per facing direction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CameraSettings {
    /// Device used for the rear ("environment") direction.
    pub environment_device: Option<String>,
    /// Device used for the front ("user") direction.
    pub user_device: Option<String>,
}

/// What: Determine the settings file path, searching in priority order.
///
/// Output:
/// - First existing candidate among `$HOME/.config/qrdrop/settings.conf`
///   and `$XDG_CONFIG_HOME/qrdrop/settings.conf`, or `None`.
pub(crate) fn resolve_settings_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join("qrdrop").join("settings.conf"));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("qrdrop").join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// What: Parse settings file contents.
///
/// Inputs:
/// - `contents`: TOML text.
///
/// Output:
/// - Parsed [`Settings`] or a readable error string.
pub fn parse_settings(contents: &str) -> Result<Settings, String> {
    toml::from_str(contents).map_err(|e| format!("invalid settings file: {e}"))
}

/// What: Load settings from disk, falling back to defaults.
///
/// Output:
/// - Parsed [`Settings`]; a missing file or parse error yields
///   `Settings::default()` (the error is logged, not surfaced).
#[must_use]
pub fn load() -> Settings {
    let Some(path) = resolve_settings_path() else {
        return Settings::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse_settings(&contents) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
                Settings::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings file");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_parse_full_file() {
        let s = parse_settings(
            r#"
[upload]
cloud_name = "acme"
upload_preset = "acme_unsigned"

[camera]
environment_device = "/dev/video2"
"#,
        )
        .expect("settings should parse");
        assert_eq!(s.upload.cloud_name.as_deref(), Some("acme"));
        assert_eq!(s.upload.upload_preset.as_deref(), Some("acme_unsigned"));
        assert_eq!(s.camera.environment_device.as_deref(), Some("/dev/video2"));
        assert_eq!(s.camera.user_device, None);
    }

    #[test]
    fn settings_parse_empty_is_default() {
        let s = parse_settings("").expect("empty settings should parse");
        assert!(s.upload.cloud_name.is_none());
        assert!(s.camera.environment_device.is_none());
    }

    #[test]
    fn settings_parse_rejects_garbage() {
        assert!(parse_settings("upload = [").is_err());
    }
}
