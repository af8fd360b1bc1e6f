//! QR payload assembly and terminal rendering.
//!
//! On a successful submit the form state is frozen into an immutable JSON
//! record (identifier, scalar fields, image URL, generation timestamp) and
//! rendered at error-correction level H as a unicode-block image. A new
//! record is built from scratch on every submit; nothing here mutates the
//! form.

use chrono::{DateTime, SecondsFormat, Utc};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use serde_json::{Map, Value, json};

use crate::logic::fields::{FieldKind, FormSpec};
use crate::state::FormState;

/// Immutable result of one successful submission.
#[derive(Debug, Clone)]
pub struct QrView {
    /// Serialized payload encoded in the QR code.
    pub payload: String,
    /// Unicode-block rendering of the code.
    pub art: String,
    /// Snapshot used for the summary list.
    pub record: Value,
}

/// What: Assemble the payload record from validated form state.
///
/// Inputs:
/// - `spec`: Form definition providing the payload key names
/// - `form`: Validated form state
/// - `generated_at`: Submission timestamp
///
/// Output:
/// - A JSON object with `id`, one entry per scalar field, `image` and an
///   RFC 3339 `timestamp`
pub fn assemble(spec: &FormSpec, form: &FormState, generated_at: DateTime<Utc>) -> Value {
    let mut record = Map::new();
    record.insert("id".to_string(), json!(form.id.to_string()));
    for field in spec.fields {
        if matches!(field.kind, FieldKind::Photo) || field.json_key.is_empty() {
            continue;
        }
        record.insert(field.json_key.to_string(), json!(form.value(field.id)));
    }
    record.insert("image".to_string(), json!(form.image_url));
    record.insert(
        "timestamp".to_string(),
        json!(generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Value::Object(record)
}

/// What: Render a payload string as a unicode-block QR image.
///
/// Inputs:
/// - `payload`: Serialized record
///
/// Output:
/// - Multi-line string drawing the code at error-correction level H
///
/// # Errors
/// - A reason string when the payload does not fit a QR code
pub fn render_unicode(payload: &str) -> Result<String, String> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
        .map_err(|e| format!("QR encoding failed: {e}"))?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}

/// What: Build the complete result view for one submission.
///
/// # Errors
/// - A reason string when rendering fails
pub fn build_view(
    spec: &FormSpec,
    form: &FormState,
    generated_at: DateTime<Utc>,
) -> Result<QrView, String> {
    let record = assemble(spec, form, generated_at);
    let payload = record.to_string();
    let art = render_unicode(&payload)?;
    Ok(QrView {
        payload,
        art,
        record,
    })
}
