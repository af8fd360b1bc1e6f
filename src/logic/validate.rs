//! The validation gate: a pure, total function from form state to the
//! full set of per-field errors.

use crate::logic::fields::{FieldKind, FormSpec};
use crate::logic::sanitize::{is_valid_phone, strip_phone_separators};
use crate::state::{FormState, ValidationErrors};

/// What: Validate every field of a form.
///
/// Inputs:
/// - `spec`: Form definition (field list and rules)
/// - `form`: Current form state
///
/// Output:
/// - The complete error set, keyed by field id with translation-key
///   messages; empty means the form may be submitted
///
/// Details:
/// - Every rule is evaluated; failing fields are reported together rather
///   than stopping at the first. The result is recomputed from scratch on
///   each call, so repeated runs over unchanged state are identical.
#[must_use]
pub fn validate(spec: &FormSpec, form: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in spec.fields {
        let value = form.value(field.id);
        match field.kind {
            FieldKind::Text => {
                if field.required && value.trim().is_empty() {
                    errors.insert(field.id, field.required_key.to_string());
                }
            }
            FieldKind::Phone => {
                let cleaned = strip_phone_separators(value);
                if cleaned.is_empty() {
                    errors.insert(field.id, field.required_key.to_string());
                } else if !is_valid_phone(&cleaned) {
                    errors.insert(field.id, "errorMessages.invalidPhone".to_string());
                }
            }
            FieldKind::Number { .. } | FieldKind::Select(_) => {
                if field.required && value.trim().is_empty() {
                    errors.insert(field.id, field.required_key.to_string());
                }
            }
            FieldKind::Note => {}
            FieldKind::Photo => {
                if field.required && !form.has_photo() {
                    errors.insert(field.id, field.required_key.to_string());
                }
            }
        }
    }
    errors
}
