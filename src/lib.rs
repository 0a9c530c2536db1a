//! Action-key label resolution for software keyboards.
//!
//! Given the editor action a text field requested and the active keyboard
//! subtype, [`ActionKeyResolver`] decides what the action key shows: a fixed
//! icon for Enter and Search, or localized label text for Go, Send, Next,
//! Done and Previous. Label text renders in the subtype's own display locale
//! (with a data-driven collapse-to-root exception table), except for the
//! no-language layout, which tracks the ambient system locale through
//! [`AmbientLocaleTracker`].

pub mod action;
pub mod config;
pub mod error;
pub mod icons;
pub mod locale;
pub mod policy;
pub mod resolver;
pub mod subtype;
pub mod texts;
pub mod tracker;

pub use action::{ActionSlot, EditorAction, LabelSlot};
pub use config::PolicyConfig;
pub use error::ResolveError;
pub use icons::{IconId, IconsSet, NAME_ENTER_KEY, NAME_SEARCH_KEY};
pub use locale::Locale;
pub use policy::DisplayLocalePolicy;
pub use resolver::{ActionKeyResolver, KeyDescriptor};
pub use subtype::{Subtype, SubtypeStore};
pub use texts::{EmbeddedTexts, TextProvider, TextResourceSet};
pub use tracker::AmbientLocaleTracker;
