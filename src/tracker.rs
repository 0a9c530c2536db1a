use std::sync::{PoisonError, RwLock};

use crate::locale::Locale;

#[derive(Clone, Debug)]
struct AmbientState {
    epoch: u64,
    locale: Locale,
}

/// Process-wide record of the last observed ambient (system) locale.
///
/// Dependent caches use a pull model: each read carries the epoch it was
/// built against and revalidates by comparing epochs, instead of being
/// push-notified. A transition to the already-tracked locale is a no-op and
/// leaves the epoch untouched, so dependents skip the rebuild.
///
/// Epoch and locale live under one lock so a concurrent reader never sees a
/// torn pair.
#[derive(Debug)]
pub struct AmbientLocaleTracker {
    state: RwLock<AmbientState>,
}

impl AmbientLocaleTracker {
    /// `initial` is the host's ambient locale at process start.
    pub fn new(initial: Locale) -> Self {
        Self {
            state: RwLock::new(AmbientState {
                epoch: 0,
                locale: initial,
            }),
        }
    }

    pub fn current(&self) -> Locale {
        self.read().locale.clone()
    }

    /// Monotonic cache epoch; bumps exactly when the tracked locale changes.
    pub fn epoch(&self) -> u64 {
        self.read().epoch
    }

    /// Consistent (epoch, locale) pair for cache tagging.
    pub fn snapshot(&self) -> (u64, Locale) {
        let state = self.read();
        (state.epoch, state.locale.clone())
    }

    /// Host notification that the ambient locale changed. Returns `false`
    /// when `new_locale` is already the tracked locale.
    pub fn on_ambient_locale_changed(&self, new_locale: Locale) -> bool {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if state.locale == new_locale {
            return false;
        }
        state.locale = new_locale;
        state.epoch += 1;
        true
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, AmbientState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
