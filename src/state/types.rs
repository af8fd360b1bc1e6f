//! Core value types used by qrdrop state.

use crate::camera::Facing;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English.
    En,
    /// Thai (startup default).
    Th,
}

impl Language {
    /// Return the other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Th,
            Self::Th => Self::En,
        }
    }

    /// Short locale code used in logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Th
    }
}

/// Which form flavor the session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Courier drop-off form.
    Delivery,
    /// On-site service form.
    Service,
}

/// Identifies one field of a form.
///
/// The delivery and service flavors share ids where the concern is the
/// same (name, phone, note, photo) and each uses the numeric/choice ids
/// that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Courier company / company name.
    Name,
    /// Number of packages (delivery only).
    PackageCount,
    /// Hours of service performed (service only).
    ServiceHours,
    /// Contact phone number.
    ContactNumber,
    /// Enumerated service type (service only).
    ServiceType,
    /// Free-form note, optional.
    AdditionalInfo,
    /// Photo attachment; the stored value is the file-path input buffer.
    Photo,
}

/// Which top-level screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The editable form.
    Form,
    /// The post-submit QR result page.
    Result,
}

/// UI mirror of the camera worker's stream state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    /// No stream open.
    Closed,
    /// An open or switch request is in flight.
    Opening,
    /// A live stream is bound; capture and switch are available.
    Live {
        /// Active facing direction.
        facing: Facing,
        /// Native stream width in pixels.
        width: u32,
        /// Native stream height in pixels.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_language_toggle_roundtrip() {
        assert_eq!(Language::Th.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Th);
        assert_eq!(Language::default(), Language::Th);
    }
}
