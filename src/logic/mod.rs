//! Pure form logic: field definitions, input sanitizing and the
//! validation gate.

pub mod fields;
pub mod sanitize;
pub mod validate;

pub use fields::{
    DELIVERY_FORM, FieldKind, FieldSpec, FormSpec, SERVICE_FORM, SERVICE_TYPES, SelectOption,
    apply_backspace, apply_char, cycle_select, spec_for,
};
pub use sanitize::{
    MAX_PACKAGE_COUNT, MAX_SERVICE_HOURS, clamp_number, is_valid_phone, sanitize_phone,
    strip_phone_separators,
};
pub use validate::validate;
