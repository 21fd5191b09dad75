//! `localStorage`-backed theme persistence.

use design_system::{decode_mode, encode_mode, ThemeMode, ThemeStore, ThemeStoreError};

#[derive(Debug, Clone, Copy)]
/// Theme store backed by `window.localStorage` under a fixed key.
///
/// Off the browser it stores nothing and loads nothing.
pub struct LocalStorageThemeStore {
    key: &'static str,
}

impl Default for LocalStorageThemeStore {
    fn default() -> Self {
        Self::new(design_system::THEME_STORAGE_KEY)
    }
}

impl LocalStorageThemeStore {
    /// Creates a store writing under `key`.
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn read_raw(self) -> Result<Option<String>, ThemeStoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(ThemeStoreError::Unavailable)?;
            storage
                .get_item(self.key)
                .map_err(|err| ThemeStoreError::Backend(format!("get_item failed: {err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self.key;
            Ok(None)
        }
    }

    fn write_raw(self, raw: &str) -> Result<(), ThemeStoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(ThemeStoreError::Unavailable)?;
            storage
                .set_item(self.key, raw)
                .map_err(|err| ThemeStoreError::Backend(format!("set_item failed: {err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (self.key, raw);
            Ok(())
        }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>, ThemeStoreError> {
        self.read_raw()?.as_deref().map(decode_mode).transpose()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        self.write_raw(&encode_mode(mode)?)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_store_is_inert() {
        let store = LocalStorageThemeStore::default();

        assert_eq!(store.key, "design-system.theme.v1");
        assert_eq!(store.save(ThemeMode::Dark), Ok(()));
        assert_eq!(store.load(), Ok(None));
    }
}
