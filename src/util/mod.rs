//! Small shared helpers: path resolution for config/log files and string
//! width utilities used by the UI.

use std::env;
use std::path::PathBuf;

use unicode_width::UnicodeWidthStr;

/// What: Resolve qrdrop's configuration directory, creating it if missing.
///
/// Output:
/// - `$XDG_CONFIG_HOME/qrdrop` when set, otherwise `$HOME/.config/qrdrop`,
///   falling back to `./.config/qrdrop` when neither variable exists.
///
/// Details:
/// - Creation failures are ignored; callers handle unwritable paths when
///   they actually open files there.
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map_or_else(
            || {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config")
            },
            PathBuf::from,
        );
    let dir = base.join("qrdrop");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Resolve the log directory (`<config_dir>/logs`), creating it if missing.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Truncate a string to a display width, appending an ellipsis.
///
/// Inputs:
/// - `s`: Source text.
/// - `max_width`: Maximum terminal cells the result may occupy.
///
/// Output:
/// - The original string when it fits, otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthStr::width(ch.to_string().as_str());
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
