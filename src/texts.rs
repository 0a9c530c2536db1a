use std::collections::HashMap;

use anyhow::{Context, Result};
use rust_embed::RustEmbed;

use crate::error::ResolveError;
use crate::locale::Locale;

/// Symbolic text ids a resource set resolves on `set_locale`. Closed set;
/// adding a label slot means adding its id here and in every bundle.
pub const LABEL_TEXT_IDS: &[&str] = &[
    "label_go_key",
    "label_send_key",
    "label_next_key",
    "label_done_key",
    "label_previous_key",
];

/// Backend supplying localized strings by (locale, symbolic id).
///
/// Implementations own the fallback behavior for locales they have no exact
/// bundle for; in particular the root locale must resolve against an
/// unlocalized default bundle.
pub trait TextProvider {
    fn lookup_string(&self, locale: &Locale, id: &str) -> Option<String>;
}

/// Per-locale cache of resolved label strings.
///
/// `set_locale` opens a new epoch: it queries the provider once per known
/// symbolic id and the results stay fixed until the next `set_locale` with a
/// different locale. Strings resolved under different locales are never
/// mixed within an epoch.
#[derive(Clone, Debug, Default)]
pub struct TextResourceSet {
    locale: Option<Locale>,
    cache: HashMap<&'static str, String>,
}

impl TextResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cache for `locale`, releasing any prior entries.
    /// Idempotent: repeating the current locale keeps the existing epoch and
    /// does not requery the provider.
    pub fn set_locale(&mut self, locale: &Locale, provider: &dyn TextProvider) {
        if self.locale.as_ref() == Some(locale) {
            return;
        }
        self.cache.clear();
        for &id in LABEL_TEXT_IDS {
            if let Some(text) = provider.lookup_string(locale, id) {
                self.cache.insert(id, text);
            }
        }
        self.locale = Some(locale.clone());
    }

    /// The locale of the current epoch, if one has been opened.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Fetch a resolved string. Fails before any `set_locale` call and for
    /// ids the provider could not resolve; both indicate a resource
    /// misconfiguration.
    pub fn get_text(&self, id: &str) -> Result<&str, ResolveError> {
        let locale = self.locale.as_ref().ok_or(ResolveError::LocaleNotSet)?;
        self.cache
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::MissingText {
                id: id.to_string(),
                locale: locale.clone(),
            })
    }
}

const DEFAULT_BUNDLE: &str = "default";

#[derive(RustEmbed)]
#[folder = "resources/"]
struct BundleFiles;

/// Built-in [`TextProvider`] backed by the TOML bundles embedded under
/// `resources/`. Each bundle is a flat table of symbolic id to string, named
/// by locale tag; `default.toml` is the unlocalized bundle the root locale
/// maps to.
#[derive(Clone, Debug)]
pub struct EmbeddedTexts {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl EmbeddedTexts {
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();
        for path in BundleFiles::iter() {
            let Some(stem) = path.strip_suffix(".toml") else {
                continue;
            };
            let file = BundleFiles::get(&path)
                .with_context(|| format!("embedded bundle `{path}` missing"))?;
            let content = std::str::from_utf8(file.data.as_ref())
                .with_context(|| format!("bundle `{path}` is not UTF-8"))?;
            let table: HashMap<String, String> = toml::from_str(content)
                .with_context(|| format!("bundle `{path}` is not a flat TOML table"))?;
            bundles.insert(stem.to_string(), table);
        }
        Ok(Self { bundles })
    }

    /// Bundle names probed for a locale: exact tag, bare language, then the
    /// unlocalized default. Root probes the default bundle only.
    fn bundle_chain(locale: &Locale) -> Vec<String> {
        let mut chain = Vec::new();
        if !locale.is_root() {
            let tag = locale.tag();
            let language = locale.language().to_string();
            if tag != language {
                chain.push(tag);
            }
            chain.push(language);
        }
        chain.push(DEFAULT_BUNDLE.to_string());
        chain
    }
}

impl TextProvider for EmbeddedTexts {
    fn lookup_string(&self, locale: &Locale, id: &str) -> Option<String> {
        Self::bundle_chain(locale)
            .iter()
            .find_map(|name| self.bundles.get(name).and_then(|bundle| bundle.get(id)))
            .cloned()
    }
}
