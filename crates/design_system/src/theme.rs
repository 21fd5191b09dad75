//! Light/dark theme selection with pluggable persistence.
//!
//! [`ThemeProvider`] exposes the active [`ThemeMode`] through context and writes it to a
//! `data-ui-theme` wrapper attribute. Persistence goes through a [`ThemeStore`] injected by the
//! host; failures are logged and never block the toggle.

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ScopedContext;
use crate::primitives::merge_layout_class;
use crate::{Icon, IconName, IconSize};

/// Storage key used by browser-backed stores.
pub const THEME_STORAGE_KEY: &str = "design-system.theme.v1";

const THEME: ScopedContext<ThemeContext> = ScopedContext::new("ThemeProvider");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Color scheme applied to the page.
pub enum ThemeMode {
    /// Light surfaces, dark text.
    #[default]
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// DOM token written to `data-ui-theme`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn toggle_icon(self) -> IconName {
        match self {
            Self::Light => IconName::Moon,
            Self::Dark => IconName::Sun,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure raised by a [`ThemeStore`].
pub enum ThemeStoreError {
    /// No storage backend exists on this target.
    #[error("theme storage is unavailable")]
    Unavailable,
    /// The mode could not be encoded.
    #[error("failed to encode theme: {0}")]
    Serialize(String),
    /// The stored payload is not a known mode.
    #[error("failed to decode stored theme: {0}")]
    Deserialize(String),
    /// The backend rejected the read or write.
    #[error("theme storage failed: {0}")]
    Backend(String),
}

/// Host persistence for the selected [`ThemeMode`].
pub trait ThemeStore {
    /// Loads the saved mode, `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<ThemeMode>, ThemeStoreError>;

    /// Saves `mode`.
    fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError>;
}

/// Encodes a mode as the JSON text stores persist.
///
/// # Errors
///
/// Returns [`ThemeStoreError::Serialize`] when encoding fails.
pub fn encode_mode(mode: ThemeMode) -> Result<String, ThemeStoreError> {
    serde_json::to_string(&mode).map_err(|err| ThemeStoreError::Serialize(err.to_string()))
}

/// Decodes JSON text written by [`encode_mode`].
///
/// # Errors
///
/// Returns [`ThemeStoreError::Deserialize`] for unknown or malformed payloads.
pub fn decode_mode(raw: &str) -> Result<ThemeMode, ThemeStoreError> {
    serde_json::from_str(raw).map_err(|err| ThemeStoreError::Deserialize(err.to_string()))
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing. Used on targets without storage and in tests.
pub struct NoopThemeStore;

impl ThemeStore for NoopThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>, ThemeStoreError> {
        Ok(None)
    }

    fn save(&self, _mode: ThemeMode) -> Result<(), ThemeStoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store holding the encoded mode. Clones share the same slot.
pub struct MemoryThemeStore {
    inner: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    /// Creates a store pre-seeded with raw JSON text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Raw JSON text currently stored.
    pub fn raw(&self) -> Option<String> {
        self.inner.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>, ThemeStoreError> {
        self.inner.borrow().as_deref().map(decode_mode).transpose()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        *self.inner.borrow_mut() = Some(encode_mode(mode)?);
        Ok(())
    }
}

/// Theme state shared by [`ThemeProvider`] with its descendants.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    store: StoredValue<Rc<dyn ThemeStore>>,
}

impl ThemeContext {
    /// Restores the saved mode from `store`, falling back to `fallback` when nothing usable is
    /// stored.
    pub fn new(store: Rc<dyn ThemeStore>, fallback: ThemeMode) -> Self {
        let initial = match store.load() {
            Ok(saved) => saved.unwrap_or(fallback),
            Err(err) => {
                logging::warn!("theme restore failed: {err}");
                fallback
            }
        };
        Self {
            mode: create_rw_signal(initial),
            store: store_value(store),
        }
    }

    /// Active mode, tracked.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Switches to `mode` and persists it. Re-selecting the active mode does nothing.
    pub fn set(&self, mode: ThemeMode) {
        if self.mode.get_untracked() == mode {
            return;
        }
        self.mode.set(mode);
        self.store.with_value(|store| {
            if let Err(err) = store.save(mode) {
                logging::warn!("theme persist failed: {err}");
            }
        });
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        self.set(self.mode.get_untracked().toggled());
    }
}

/// Reads the enclosing [`ThemeProvider`]'s context.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider`.
pub fn use_theme() -> ThemeContext {
    THEME.require("use_theme")
}

#[component]
/// Establishes the theme for its subtree and persists changes through `store`.
pub fn ThemeProvider(
    #[prop(optional)] store: Option<Rc<dyn ThemeStore>>,
    #[prop(optional)] default_mode: ThemeMode,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Rc::new(NoopThemeStore));
    let theme = ThemeContext::new(store, default_mode);
    THEME.provide(theme);

    view! {
        <div class="ui-theme-root" data-ui-theme=move || theme.mode().token()>
            {children()}
        </div>
    }
}

#[component]
/// Icon button flipping the enclosing [`ThemeProvider`] between light and dark.
pub fn ThemeToggle(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let theme = THEME.require("ThemeToggle");
    let label = move || match theme.mode() {
        ThemeMode::Light => "Switch to dark theme",
        ThemeMode::Dark => "Switch to light theme",
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-theme-toggle", layout_class)
            aria-label=label
            title=label
            data-ui-primitive="true"
            data-ui-kind="theme-toggle"
            data-ui-theme=move || theme.mode().token()
            on:click=move |_| theme.toggle()
        >
            {move || view! { <Icon icon=theme.mode().toggle_icon() size=IconSize::Sm /> }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> Result<Option<ThemeMode>, ThemeStoreError> {
            Err(ThemeStoreError::Unavailable)
        }

        fn save(&self, _mode: ThemeMode) -> Result<(), ThemeStoreError> {
            Err(ThemeStoreError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn modes_serialize_as_kebab_tokens() {
        assert_eq!(encode_mode(ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(decode_mode("\"light\"").unwrap(), ThemeMode::Light);
        assert!(matches!(
            decode_mode("\"sepia\""),
            Err(ThemeStoreError::Deserialize(_))
        ));
    }

    #[test]
    fn memory_store_persists_toggles() {
        let _ = create_runtime();
        let store = MemoryThemeStore::default();
        let theme = ThemeContext::new(Rc::new(store.clone()), ThemeMode::Light);

        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(store.raw(), None);

        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(store.raw().as_deref(), Some("\"dark\""));

        theme.toggle();
        assert_eq!(store.raw().as_deref(), Some("\"light\""));
    }

    #[test]
    fn saved_mode_wins_over_fallback() {
        let _ = create_runtime();
        let store = MemoryThemeStore::with_raw("\"dark\"");
        let theme = ThemeContext::new(Rc::new(store), ThemeMode::Light);

        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn corrupt_or_failing_store_falls_back_and_still_toggles() {
        let _ = create_runtime();
        let corrupt = ThemeContext::new(Rc::new(MemoryThemeStore::with_raw("{")), ThemeMode::Dark);
        assert_eq!(corrupt.mode(), ThemeMode::Dark);

        let failing = ThemeContext::new(Rc::new(FailingStore), ThemeMode::Light);
        failing.toggle();
        assert_eq!(failing.mode(), ThemeMode::Dark);
    }

    #[test]
    fn theme_context_is_visible_to_descendants() {
        let _ = create_runtime();
        let mode = run_as_child(|| {
            THEME.provide(ThemeContext::new(Rc::new(NoopThemeStore), ThemeMode::Dark));
            run_as_child(|| use_theme().mode())
        });

        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    #[should_panic(expected = "use_theme must be used within ThemeProvider")]
    fn use_theme_outside_provider_panics() {
        let _ = create_runtime();
        let _ = use_theme();
    }
}
