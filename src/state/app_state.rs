//! The single mutable application state container.

use std::time::{Duration, Instant};

use crate::i18n::{Catalog, TranslationMap};
use crate::qr::QrView;
use crate::state::form::FormState;
use crate::state::modal::Modal;
use crate::state::types::{CameraView, FormKind, Language, Screen};

/// How long transient success toasts stay visible.
pub const TOAST_SECS: u64 = 3;

/// Everything the event handlers and renderer operate on.
///
/// The language context deliberately lives here rather than in a global:
/// every component that needs a translation receives `&AppState`.
#[derive(Debug)]
pub struct AppState {
    /// Which form flavor this session edits.
    pub form_kind: FormKind,
    /// Active UI language; resets to Thai on restart, never persisted.
    pub language: Language,
    /// Embedded locale catalog for both languages.
    pub catalog: Catalog,
    /// The form being edited.
    pub form: FormState,
    /// Index of the focused field within the active form definition.
    pub focus: usize,
    /// Visible screen (form or QR result).
    pub screen: Screen,
    /// UI mirror of the camera worker's stream state.
    pub camera: CameraView,
    /// True while an upload is in flight; upload triggers are disabled.
    pub uploading: bool,
    /// True while a submit is being processed; the submit trigger is disabled.
    pub submitting: bool,
    /// General inline error line (camera/upload failures), already translated.
    pub inline_error: Option<String>,
    /// Transient success notice shown near the footer.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
    /// Currently displayed modal.
    pub modal: Modal,
    /// Rendered QR artifact after a successful submit.
    pub qr: Option<QrView>,
    /// Skip the network upload and record a placeholder URL (CLI flag).
    pub no_upload: bool,
    /// Form generation counter; stale async results are dropped against it.
    pub generation: u64,
}

impl AppState {
    /// Translation map for the active language.
    #[must_use]
    pub fn translations(&self) -> &TranslationMap {
        self.catalog.map(self.language)
    }

    /// Toggle between the two supported languages.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = self.language.code(), "language switched");
    }

    /// What: Show a transient toast that auto-expires.
    ///
    /// Inputs:
    /// - `message`: Already-translated text
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some(message);
        self.toast_expires_at = Some(Instant::now() + Duration::from_secs(TOAST_SECS));
    }

    /// What: Start a fresh form session ("create new").
    ///
    /// Details:
    /// - Regenerates the identifier, clears every field, error and flag,
    ///   bumps the generation counter so in-flight upload results are
    ///   dropped, and returns to the form screen. The camera mirror is
    ///   reset here; the worker releases any open stream on the cancel
    ///   command the caller sends alongside.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.generation = self.generation.wrapping_add(1);
        self.focus = 0;
        self.screen = Screen::Form;
        self.camera = CameraView::Closed;
        self.uploading = false;
        self.submitting = false;
        self.inline_error = None;
        self.toast_message = None;
        self.toast_expires_at = None;
        self.qr = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form_kind: FormKind::Delivery,
            language: Language::default(),
            catalog: Catalog::embedded().unwrap_or_default(),
            form: FormState::new(),
            focus: 0,
            screen: Screen::Form,
            camera: CameraView::Closed,
            uploading: false,
            submitting: false,
            inline_error: None,
            toast_message: None,
            toast_expires_at: None,
            modal: Modal::None,
            qr: None,
            no_upload: false,
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;

    #[test]
    /// What: Reset produces a clean session with a new identifier
    ///
    /// - Input: A dirtied state (values, flags, toast, bumped focus)
    /// - Output: Fresh form, generation bumped, flags and toast cleared
    fn app_state_reset_form_clears_session() {
        let mut app = AppState::default();
        let old_id = app.form.id;
        let old_generation = app.generation;
        app.form.set_value(FieldId::Name, "ACME".into());
        app.uploading = true;
        app.focus = 3;
        app.screen = Screen::Result;
        app.show_toast("done".into());

        app.reset_form();
        assert_ne!(app.form.id, old_id);
        assert_eq!(app.generation, old_generation + 1);
        assert_eq!(app.focus, 0);
        assert_eq!(app.screen, Screen::Form);
        assert!(!app.uploading);
        assert!(app.toast_message.is_none());
        assert!(app.qr.is_none());
    }

    #[test]
    fn app_state_default_language_is_thai() {
        let app = AppState::default();
        assert_eq!(app.language, Language::Th);
        assert!(!app.translations().is_empty());
    }
}
