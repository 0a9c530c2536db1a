use thiserror::Error;

use crate::locale::Locale;

/// Errors surfaced by action-key resolution.
///
/// Every variant is a configuration or integration defect, never a transient
/// condition: a missing text or icon resource means the resource tables are
/// wrong, and an unknown action code means the host passed a value outside
/// the editor-action contract. Callers must propagate these rather than
/// substitute placeholder content, which would hide the defect in the UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no text resource `{id}` for locale `{locale}`")]
    MissingText { id: String, locale: Locale },

    #[error("no icon resource named `{name}`")]
    MissingIcon { name: String },

    #[error("text lookup before a locale was set")]
    LocaleNotSet,

    #[error("unknown editor action code {0}")]
    UnknownAction(u32),
}
