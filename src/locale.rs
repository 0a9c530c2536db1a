use std::fmt;

use serde::{Deserialize, Serialize};

/// A keyboard locale identifier: language plus optional region and variant.
///
/// Identifiers are treated as opaque, a malformed tag simply parses into
/// whatever fields it yields and fails any table lookups downstream. The
/// empty identifier is the root ("unlocalized") locale, used when a
/// subtype's labels must come from the default resource bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// The root (unlocalized) locale. Equal only to itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a tag like `"it"`, `"hi_ZZ"` or `"fr-CA"`.
    ///
    /// Both `_` and `-` separators are accepted; language is lowercased and
    /// region uppercased so that equal locales compare equal regardless of
    /// the host's casing convention. An empty tag is the root locale.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().replace('-', "_");
        if tag.is_empty() {
            return Self::root();
        }
        let mut parts = tag.splitn(3, '_');
        let language = parts.next().unwrap_or("").to_lowercase();
        let region = parts.next().map(|r| r.to_uppercase());
        let variant = parts.next().map(|v| v.to_string());
        Self {
            language,
            region,
            variant,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.region.is_none() && self.variant.is_none()
    }

    /// Canonical underscore-joined tag. The root locale yields `""`.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(region) = &self.region {
            tag.push('_');
            tag.push_str(region);
        }
        if let Some(variant) = &self.variant {
            tag.push('_');
            tag.push_str(variant);
        }
        tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag()
    }
}
