use std::collections::HashMap;

use crate::error::ResolveError;

/// Symbolic name of the plain Enter key icon.
pub const NAME_ENTER_KEY: &str = "enter_key";
/// Symbolic name of the Search key icon.
pub const NAME_SEARCH_KEY: &str = "search_key";

/// Opaque handle to a host icon resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId(u32);

impl IconId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Registry mapping symbolic icon names to host icon handles.
#[derive(Clone, Debug, Default)]
pub struct IconsSet {
    icons: HashMap<String, IconId>,
}

impl IconsSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the engine's own icon names. Hosts replacing
    /// these handles re-register under the same names.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.register(NAME_ENTER_KEY, IconId::new(1));
        set.register(NAME_SEARCH_KEY, IconId::new(2));
        set
    }

    pub fn register(&mut self, name: impl Into<String>, id: IconId) {
        self.icons.insert(name.into(), id);
    }

    /// Unregistered names are a resource-configuration bug and fail loudly.
    pub fn lookup_icon(&self, name: &str) -> Result<IconId, ResolveError> {
        self.icons
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::MissingIcon {
                name: name.to_string(),
            })
    }
}
