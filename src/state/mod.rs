//! Application state: the form container, value types and the modal enum.

mod app_state;
mod form;
mod modal;
mod types;

pub use app_state::{AppState, TOAST_SECS};
pub use form::{FormState, ValidationErrors};
pub use modal::Modal;
pub use types::{CameraView, FieldId, FormKind, Language, Screen};
