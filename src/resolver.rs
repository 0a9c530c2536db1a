use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;

use crate::action::{ActionSlot, EditorAction, LabelSlot};
use crate::error::ResolveError;
use crate::icons::{IconId, IconsSet, NAME_ENTER_KEY, NAME_SEARCH_KEY};
use crate::locale::Locale;
use crate::policy::DisplayLocalePolicy;
use crate::subtype::Subtype;
use crate::texts::{EmbeddedTexts, TextProvider, TextResourceSet};
use crate::tracker::AmbientLocaleTracker;

/// The rendered action key: a universal icon, or label text in the locale it
/// was resolved under. The locale field is the literal display locale, so a
/// collapsed subtype reports root here even though its text came from the
/// default bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyDescriptor {
    Icon(IconId),
    Label { text: String, locale: Locale },
}

#[derive(Default)]
struct TextsCache {
    /// Resource sets pinned to a subtype's display locale. Never touched by
    /// ambient transitions.
    pinned: HashMap<Locale, Arc<TextResourceSet>>,
    /// Resource set for the no-language layout, tagged with the tracker
    /// epoch it was built against.
    ambient: Option<(u64, Arc<TextResourceSet>)>,
}

/// Top-level entry point mapping a requested editor action to the key to
/// display.
///
/// Enter and Search render as fixed icons in every locale. The five label
/// actions resolve a display locale (the subtype's own, normalized by the
/// display policy; or the ambient locale for the no-language layout) and
/// fetch their text from a resource set cached per display locale. Ambient
/// resource sets revalidate against the tracker epoch on each call; a stale
/// epoch swaps in a freshly built set, so holders of the old one keep a
/// consistent view.
pub struct ActionKeyResolver {
    policy: DisplayLocalePolicy,
    tracker: Arc<AmbientLocaleTracker>,
    icons: IconsSet,
    provider: Arc<dyn TextProvider + Send + Sync>,
    cache: Mutex<TextsCache>,
}

impl ActionKeyResolver {
    pub fn new(
        provider: Arc<dyn TextProvider + Send + Sync>,
        policy: DisplayLocalePolicy,
        tracker: Arc<AmbientLocaleTracker>,
        icons: IconsSet,
    ) -> Self {
        Self {
            policy,
            tracker,
            icons,
            provider,
            cache: Mutex::new(TextsCache::default()),
        }
    }

    /// Resolver over the embedded bundles with stock policy tables and
    /// icons. `initial_ambient` is the host's ambient locale at startup.
    pub fn with_embedded_texts(initial_ambient: Locale) -> Result<Self> {
        Ok(Self::new(
            Arc::new(EmbeddedTexts::new()?),
            DisplayLocalePolicy::default(),
            Arc::new(AmbientLocaleTracker::new(initial_ambient)),
            IconsSet::with_defaults(),
        ))
    }

    pub fn tracker(&self) -> &AmbientLocaleTracker {
        &self.tracker
    }

    /// Entry point for the host locale-change notifier. Returns `false` for
    /// a no-op transition (locale unchanged, caches untouched).
    pub fn on_ambient_locale_changed(&self, locale: Locale) -> bool {
        self.tracker.on_ambient_locale_changed(locale)
    }

    /// Resolve the key to display for `action` on `subtype`.
    pub fn resolve(
        &self,
        action: EditorAction,
        subtype: &Subtype,
        is_no_language: bool,
    ) -> Result<KeyDescriptor, ResolveError> {
        match action.slot() {
            ActionSlot::Enter => Ok(KeyDescriptor::Icon(self.icons.lookup_icon(NAME_ENTER_KEY)?)),
            ActionSlot::Search => {
                Ok(KeyDescriptor::Icon(self.icons.lookup_icon(NAME_SEARCH_KEY)?))
            }
            ActionSlot::Label(slot) => self.resolve_label(slot, subtype, is_no_language),
        }
    }

    fn resolve_label(
        &self,
        slot: LabelSlot,
        subtype: &Subtype,
        is_no_language: bool,
    ) -> Result<KeyDescriptor, ResolveError> {
        let (texts, display_locale) = if is_no_language {
            self.ambient_texts()
        } else {
            self.pinned_texts(subtype.locale())
        };
        let text = texts.get_text(slot.text_id())?.to_string();
        Ok(KeyDescriptor::Label {
            text,
            locale: display_locale,
        })
    }

    fn pinned_texts(&self, subtype_locale: &Locale) -> (Arc<TextResourceSet>, Locale) {
        let display_locale = self.policy.display_locale(subtype_locale);
        let mut cache = self.lock_cache();
        let texts = cache
            .pinned
            .entry(display_locale.clone())
            .or_insert_with(|| Arc::new(build_texts(&display_locale, self.provider.as_ref())))
            .clone();
        (texts, display_locale)
    }

    fn ambient_texts(&self) -> (Arc<TextResourceSet>, Locale) {
        let (epoch, ambient_locale) = self.tracker.snapshot();
        let mut cache = self.lock_cache();
        let texts = match &cache.ambient {
            Some((cached_epoch, texts)) if *cached_epoch == epoch => texts.clone(),
            _ => {
                let texts = Arc::new(build_texts(&ambient_locale, self.provider.as_ref()));
                cache.ambient = Some((epoch, texts.clone()));
                texts
            }
        };
        (texts, ambient_locale)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, TextsCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_texts(locale: &Locale, provider: &dyn TextProvider) -> TextResourceSet {
    let mut texts = TextResourceSet::new();
    texts.set_locale(locale, provider);
    texts
}
