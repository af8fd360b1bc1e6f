//! Form state: field values, per-field validation errors and the
//! per-instance identifier.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::state::FieldId;

/// Per-field validation errors, keyed by field id.
///
/// Values are translation key paths (e.g. `errorMessages.phoneRequired`)
/// so messages re-render correctly after a language toggle.
pub type ValidationErrors = HashMap<FieldId, String>;

/// Mutable state of one form session.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Opaque per-instance identifier, regenerated only on reset.
    pub id: Uuid,
    /// When this instance was created; QR timestamps are strictly later.
    pub mounted_at: DateTime<Utc>,
    /// Scalar field values (the photo entry holds the path input buffer).
    values: HashMap<FieldId, String>,
    /// Hosted image URL; set only by a successful upload.
    pub image_url: String,
    /// Local preview reference shown next to the form.
    pub image_preview: String,
    /// Errors from the last submit attempt.
    pub errors: ValidationErrors,
}

impl FormState {
    /// Create an empty form with a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            mounted_at: Utc::now(),
            values: HashMap::new(),
            image_url: String::new(),
            image_preview: String::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Current value of `field`, or the empty string.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// What: Store a new value for `field`.
    ///
    /// Inputs:
    /// - `field`: Field being edited
    /// - `value`: Already-sanitized replacement value
    ///
    /// Details:
    /// - Clears that field's validation error immediately, ahead of the
    ///   next full validation pass. Sanitizing (phone character filter,
    ///   numeric clamping) happens in `logic::fields` before this call.
    pub fn set_value(&mut self, field: FieldId, value: String) {
        self.values.insert(field, value);
        self.errors.remove(&field);
    }

    /// What: Record a completed upload.
    ///
    /// Inputs:
    /// - `url`: Secure URL returned by the image host
    ///
    /// Details:
    /// - Sets both the stored URL and the preview reference, and clears a
    ///   pending photo-required error.
    pub fn set_uploaded(&mut self, url: String) {
        self.image_preview = url.clone();
        self.image_url = url;
        self.errors.remove(&FieldId::Photo);
    }

    /// Remove the attached photo (explicit user action).
    pub fn clear_photo(&mut self) {
        self.image_url.clear();
        self.image_preview.clear();
    }

    /// Whether a photo is attached (stored URL or local preview).
    #[must_use]
    pub fn has_photo(&self) -> bool {
        !self.image_url.is_empty() || !self.image_preview.is_empty()
    }

    /// Reinitialize everything, including a fresh identifier.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Editing a field clears only that field's error
    ///
    /// - Input: Errors on two fields, then an edit on one
    /// - Output: The edited field's error is gone, the other remains
    fn form_edit_clears_own_error_only() {
        let mut form = FormState::new();
        form.errors.insert(
            FieldId::Name,
            "errorMessages.companyRequired".to_string(),
        );
        form.errors.insert(
            FieldId::ContactNumber,
            "errorMessages.phoneRequired".to_string(),
        );

        form.set_value(FieldId::Name, "ACME".to_string());
        assert!(!form.errors.contains_key(&FieldId::Name));
        assert!(form.errors.contains_key(&FieldId::ContactNumber));
    }

    #[test]
    fn form_reset_regenerates_identifier() {
        let mut form = FormState::new();
        let old_id = form.id;
        form.set_value(FieldId::Name, "ACME".to_string());
        form.set_uploaded("https://img.example/x.jpg".to_string());

        form.reset();
        assert_ne!(form.id, old_id);
        assert_eq!(form.value(FieldId::Name), "");
        assert!(!form.has_photo());
    }

    #[test]
    fn form_upload_sets_url_and_preview() {
        let mut form = FormState::new();
        form.errors.insert(
            FieldId::Photo,
            "errorMessages.photoRequired".to_string(),
        );
        form.set_uploaded("https://img.example/a.jpg".to_string());
        assert_eq!(form.image_url, "https://img.example/a.jpg");
        assert_eq!(form.image_preview, "https://img.example/a.jpg");
        assert!(form.has_photo());
        assert!(!form.errors.contains_key(&FieldId::Photo));

        form.clear_photo();
        assert!(!form.has_photo());
    }
}
