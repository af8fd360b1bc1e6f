//! Modal dialog state for the UI.

/// Currently displayed modal, if any.
///
/// Errors never open a modal; they are surfaced as inline text so the
/// form stays editable underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal visible.
    #[default]
    None,
    /// Keyboard shortcut overview.
    Help,
}
