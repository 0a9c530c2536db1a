use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Locale policy tables supplied by the host.
///
/// Both tables are data, not code: a new collapse-to-root exception or a
/// different no-language sentinel is a config edit, never a resolver change.
/// Missing fields fall back to the stock tables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Sentinel locale tag marking the no-language layout, whose labels
    /// track the ambient system locale.
    #[serde(default = "default_no_language_locale")]
    pub no_language_locale: String,
    /// Subtype locales whose display locale collapses to root, so their
    /// labels come from the unlocalized default bundle (e.g. Hinglish
    /// `hi_ZZ` and Serbian-Latin `sr_ZZ`).
    #[serde(default = "default_root_display_locales")]
    pub root_display_locales: Vec<String>,
}

fn default_no_language_locale() -> String {
    "zz".to_string()
}
fn default_root_display_locales() -> Vec<String> {
    vec!["hi_ZZ".to_string(), "sr_ZZ".to_string()]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            no_language_locale: default_no_language_locale(),
            root_display_locales: default_root_display_locales(),
        }
    }
}

impl PolicyConfig {
    /// Load from a TOML file; a missing file means stock defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: PolicyConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(PolicyConfig::default())
        }
    }

    pub fn no_language(&self) -> Locale {
        Locale::parse(&self.no_language_locale)
    }

    pub fn root_display(&self) -> Vec<Locale> {
        self.root_display_locales
            .iter()
            .map(|tag| Locale::parse(tag))
            .collect()
    }
}
