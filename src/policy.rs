use std::collections::HashSet;

use crate::config::PolicyConfig;
use crate::locale::Locale;

/// Decides which locale a subtype's labels are rendered in.
///
/// Most subtypes display in their own configured locale. The exceptions are
/// a small table of (language, region) pairs whose display locale collapses
/// to root, so their labels come from the unlocalized default bundle. The
/// no-language layout is handled before this policy is consulted; its
/// sentinel locale never reaches the collapse table.
#[derive(Clone, Debug)]
pub struct DisplayLocalePolicy {
    collapse_to_root: HashSet<(String, String)>,
}

impl DisplayLocalePolicy {
    pub fn from_config(config: &PolicyConfig) -> Self {
        let collapse_to_root = config
            .root_display()
            .into_iter()
            .filter_map(|locale| {
                let region = locale.region()?.to_string();
                Some((locale.language().to_string(), region))
            })
            .collect();
        Self { collapse_to_root }
    }

    /// Normalize a subtype locale into its display locale. Pure; locales
    /// outside the collapse table pass through unchanged.
    pub fn display_locale(&self, subtype_locale: &Locale) -> Locale {
        if let Some(region) = subtype_locale.region() {
            let key = (subtype_locale.language().to_string(), region.to_string());
            if self.collapse_to_root.contains(&key) {
                return Locale::root();
            }
        }
        subtype_locale.clone()
    }
}

impl Default for DisplayLocalePolicy {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}
