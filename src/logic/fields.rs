//! Data-driven form definitions.
//!
//! The delivery and service flavors differ only in field set and copy
//! text, so both are described by the same [`FormSpec`] tables and share
//! the editing and validation code.

use crate::logic::sanitize::{
    MAX_PACKAGE_COUNT, MAX_SERVICE_HOURS, clamp_number, sanitize_phone,
};
use crate::state::{FieldId, FormKind, FormState};

/// One selectable option of a choice field.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    /// Value recorded in the form state and QR payload.
    pub value: &'static str,
    /// Translation key of the visible label.
    pub label_key: &'static str,
}

/// Editing behavior of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Phone-like input; disallowed characters are dropped per keystroke.
    Phone,
    /// Digits clamped into `[0, max]` on every change.
    Number {
        /// Inclusive upper bound.
        max: u32,
    },
    /// One of a fixed option list.
    Select(&'static [SelectOption]),
    /// Multi-line free text, optional.
    Note,
    /// Photo attachment; the text value is the file-path input buffer.
    Photo,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field identity.
    pub id: FieldId,
    /// Translation key of the field label.
    pub label_key: &'static str,
    /// Editing behavior.
    pub kind: FieldKind,
    /// Whether the validation gate requires a value.
    pub required: bool,
    /// Translation key reported when a required value is missing.
    pub required_key: &'static str,
    /// Key under which the value appears in the QR payload ("" to skip).
    pub json_key: &'static str,
}

/// Static description of one form flavor.
#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    /// Which flavor this describes.
    pub kind: FormKind,
    /// Translation key of the page title.
    pub title_key: &'static str,
    /// Translation key of the "scan this" hint on the result page.
    pub scan_hint_key: &'static str,
    /// Translation key of the result page summary heading.
    pub summary_title_key: &'static str,
    /// Translation key of the identifier label on the result page.
    pub id_label_key: &'static str,
    /// Ordered field list.
    pub fields: &'static [FieldSpec],
}

/// Options of the service-type choice field.
pub const SERVICE_TYPES: &[SelectOption] = &[
    SelectOption {
        value: "maintenance",
        label_key: "serviceTypes.maintenance",
    },
    SelectOption {
        value: "cleaning",
        label_key: "serviceTypes.cleaning",
    },
    SelectOption {
        value: "repair",
        label_key: "serviceTypes.repair",
    },
    SelectOption {
        value: "installation",
        label_key: "serviceTypes.installation",
    },
    SelectOption {
        value: "other",
        label_key: "serviceTypes.other",
    },
];

/// Field table for the delivery flavor.
const DELIVERY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::Name,
        label_key: "form.courierName",
        kind: FieldKind::Text,
        required: true,
        required_key: "errorMessages.courierRequired",
        json_key: "courier",
    },
    FieldSpec {
        id: FieldId::PackageCount,
        label_key: "form.packageCount",
        kind: FieldKind::Number {
            max: MAX_PACKAGE_COUNT,
        },
        required: true,
        required_key: "errorMessages.packagesRequired",
        json_key: "packages",
    },
    FieldSpec {
        id: FieldId::ContactNumber,
        label_key: "form.contactNumber",
        kind: FieldKind::Phone,
        required: true,
        required_key: "errorMessages.phoneRequired",
        json_key: "phone",
    },
    FieldSpec {
        id: FieldId::AdditionalInfo,
        label_key: "form.additionalInfo",
        kind: FieldKind::Note,
        required: false,
        required_key: "",
        json_key: "info",
    },
    FieldSpec {
        id: FieldId::Photo,
        label_key: "form.deliveryPhoto",
        kind: FieldKind::Photo,
        required: true,
        required_key: "errorMessages.photoRequired",
        json_key: "",
    },
];

/// Field table for the service flavor.
const SERVICE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::Name,
        label_key: "form.companyName",
        kind: FieldKind::Text,
        required: true,
        required_key: "errorMessages.companyRequired",
        json_key: "company",
    },
    FieldSpec {
        id: FieldId::ServiceHours,
        label_key: "form.serviceHours",
        kind: FieldKind::Number {
            max: MAX_SERVICE_HOURS,
        },
        required: true,
        required_key: "errorMessages.hoursRequired",
        json_key: "hours",
    },
    FieldSpec {
        id: FieldId::ContactNumber,
        label_key: "form.contactNumber",
        kind: FieldKind::Phone,
        required: true,
        required_key: "errorMessages.phoneRequired",
        json_key: "phone",
    },
    FieldSpec {
        id: FieldId::ServiceType,
        label_key: "form.serviceType",
        kind: FieldKind::Select(SERVICE_TYPES),
        required: true,
        required_key: "errorMessages.serviceTypeRequired",
        json_key: "type",
    },
    FieldSpec {
        id: FieldId::AdditionalInfo,
        label_key: "form.additionalInfo",
        kind: FieldKind::Note,
        required: false,
        required_key: "",
        json_key: "info",
    },
    FieldSpec {
        id: FieldId::Photo,
        label_key: "form.servicePhoto",
        kind: FieldKind::Photo,
        required: true,
        required_key: "errorMessages.photoRequired",
        json_key: "",
    },
];

/// Delivery form definition.
pub const DELIVERY_FORM: FormSpec = FormSpec {
    kind: FormKind::Delivery,
    title_key: "form.deliveryTitle",
    scan_hint_key: "qr.scanDelivery",
    summary_title_key: "qr.deliverySummary",
    id_label_key: "qr.deliveryId",
    fields: DELIVERY_FIELDS,
};

/// Service form definition.
pub const SERVICE_FORM: FormSpec = FormSpec {
    kind: FormKind::Service,
    title_key: "form.serviceTitle",
    scan_hint_key: "qr.scanService",
    summary_title_key: "qr.serviceSummary",
    id_label_key: "qr.serviceId",
    fields: SERVICE_FIELDS,
};

/// Look up the form definition for a flavor.
#[must_use]
pub const fn spec_for(kind: FormKind) -> &'static FormSpec {
    match kind {
        FormKind::Delivery => &DELIVERY_FORM,
        FormKind::Service => &SERVICE_FORM,
    }
}

/// What: Apply one typed character to a field.
///
/// Inputs:
/// - `form`: Form state to mutate
/// - `field`: Definition of the focused field
/// - `ch`: Typed character
///
/// Details:
/// - Phone values are re-filtered and numeric values re-clamped on every
///   keystroke; choice fields ignore typed characters (they cycle via
///   [`cycle_select`]).
pub fn apply_char(form: &mut FormState, field: &FieldSpec, ch: char) {
    let current = form.value(field.id).to_string();
    let next = match field.kind {
        FieldKind::Text | FieldKind::Note | FieldKind::Photo => {
            let mut v = current;
            v.push(ch);
            v
        }
        FieldKind::Phone => {
            let mut v = current;
            v.push(ch);
            sanitize_phone(&v)
        }
        FieldKind::Number { max } => {
            if !ch.is_ascii_digit() {
                return;
            }
            let mut v = current;
            v.push(ch);
            clamp_number(&v, max)
        }
        FieldKind::Select(_) => return,
    };
    form.set_value(field.id, next);
}

/// What: Remove the last character of a field value.
pub fn apply_backspace(form: &mut FormState, field: &FieldSpec) {
    if matches!(field.kind, FieldKind::Select(_)) {
        return;
    }
    let mut v = form.value(field.id).to_string();
    if v.pop().is_some() {
        form.set_value(field.id, v);
    }
}

/// What: Move a choice field's selection by `delta` steps.
///
/// Details:
/// - An unset value starts from the first option; movement wraps around.
pub fn cycle_select(form: &mut FormState, field: &FieldSpec, delta: i32) {
    let FieldKind::Select(options) = field.kind else {
        return;
    };
    if options.is_empty() {
        return;
    }
    let len = options.len() as i32;
    let current = options
        .iter()
        .position(|o| o.value == form.value(field.id))
        .map_or(0, |i| {
            let moved = (i as i32 + delta).rem_euclid(len);
            moved as usize
        });
    form.set_value(field.id, options[current].value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(spec: &'static FormSpec, id: FieldId) -> &'static FieldSpec {
        spec.fields
            .iter()
            .find(|f| f.id == id)
            .expect("field should exist in spec")
    }

    #[test]
    /// What: Phone keystrokes drop disallowed characters, keep separators
    ///
    /// - Input: Typing digits, separators and letters
    /// - Output: Stored value contains only the allowed characters
    fn fields_phone_keystrokes_are_filtered() {
        let mut form = FormState::new();
        let phone = field(&DELIVERY_FORM, FieldId::ContactNumber);
        for ch in "08a1-2x3".chars() {
            apply_char(&mut form, phone, ch);
        }
        assert_eq!(form.value(FieldId::ContactNumber), "081-23");
    }

    #[test]
    /// What: Hour keystrokes clamp to 24 regardless of typed magnitude
    fn fields_hours_clamp_on_each_keystroke() {
        let mut form = FormState::new();
        let hours = field(&SERVICE_FORM, FieldId::ServiceHours);
        apply_char(&mut form, hours, '9');
        assert_eq!(form.value(FieldId::ServiceHours), "9");
        apply_char(&mut form, hours, '9');
        assert_eq!(form.value(FieldId::ServiceHours), "24");
        apply_char(&mut form, hours, 'x');
        assert_eq!(form.value(FieldId::ServiceHours), "24");
    }

    #[test]
    fn fields_backspace_shortens_value() {
        let mut form = FormState::new();
        let name = field(&SERVICE_FORM, FieldId::Name);
        for ch in "AC".chars() {
            apply_char(&mut form, name, ch);
        }
        apply_backspace(&mut form, name);
        assert_eq!(form.value(FieldId::Name), "A");
        apply_backspace(&mut form, name);
        apply_backspace(&mut form, name);
        assert_eq!(form.value(FieldId::Name), "");
    }

    #[test]
    /// What: Choice cycling wraps in both directions
    fn fields_select_cycles_and_wraps() {
        let mut form = FormState::new();
        let service_type = field(&SERVICE_FORM, FieldId::ServiceType);
        cycle_select(&mut form, service_type, 0);
        assert_eq!(form.value(FieldId::ServiceType), "maintenance");
        cycle_select(&mut form, service_type, 1);
        assert_eq!(form.value(FieldId::ServiceType), "cleaning");
        cycle_select(&mut form, service_type, -2);
        assert_eq!(form.value(FieldId::ServiceType), "other");
    }

    #[test]
    fn fields_specs_expose_expected_shapes() {
        assert_eq!(DELIVERY_FORM.fields.len(), 5);
        assert_eq!(SERVICE_FORM.fields.len(), 6);
        assert!(matches!(
            field(&SERVICE_FORM, FieldId::ServiceType).kind,
            FieldKind::Select(_)
        ));
        assert_eq!(spec_for(FormKind::Delivery).kind, FormKind::Delivery);
        assert_eq!(spec_for(FormKind::Service).kind, FormKind::Service);
    }
}
