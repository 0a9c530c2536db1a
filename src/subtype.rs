use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::locale::Locale;

/// Layout set name shared by most default subtypes.
pub const QWERTY: &str = "qwerty";

/// A configured keyboard variant: a locale plus a layout set name.
///
/// Subtypes are immutable values owned by the host; the engine only reads
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subtype {
    locale: Locale,
    layout_set: String,
}

impl Subtype {
    pub fn new(locale: Locale, layout_set: impl Into<String>) -> Self {
        Self {
            locale,
            layout_set: layout_set.into(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn layout_set(&self) -> &str {
        &self.layout_set
    }
}

/// The host's enabled-subtype table plus the no-language sentinel.
#[derive(Clone, Debug)]
pub struct SubtypeStore {
    subtypes: Vec<Subtype>,
    no_language: Locale,
}

impl SubtypeStore {
    pub fn new(subtypes: Vec<Subtype>, no_language: Locale) -> Self {
        Self {
            subtypes,
            no_language,
        }
    }

    /// A stock table covering the common default layouts, with the sentinel
    /// from the stock [`PolicyConfig`].
    pub fn with_defaults() -> Self {
        let config = PolicyConfig::default();
        let subtypes = [
            ("en_US", QWERTY),
            ("it", QWERTY),
            ("fr", "azerty"),
            ("de", "qwertz"),
            ("es", QWERTY),
            ("ja", QWERTY),
            ("hi_ZZ", QWERTY),
            ("sr_ZZ", QWERTY),
            ("zz", QWERTY),
        ]
        .into_iter()
        .map(|(tag, layout)| Subtype::new(Locale::parse(tag), layout))
        .collect();
        Self::new(subtypes, config.no_language())
    }

    pub fn subtypes(&self) -> &[Subtype] {
        &self.subtypes
    }

    pub fn find_by_locale_and_layout(&self, locale: &Locale, layout_set: &str) -> Option<&Subtype> {
        self.subtypes
            .iter()
            .find(|s| s.locale() == locale && s.layout_set() == layout_set)
    }

    /// Whether this subtype is the designated no-language layout, by
    /// comparing its locale against the configured sentinel.
    pub fn is_no_language(&self, subtype: &Subtype) -> bool {
        subtype.locale() == &self.no_language
    }
}
