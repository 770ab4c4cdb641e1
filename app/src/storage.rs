//! Browser `localStorage` backing for the boss roster

use bosswatch_core::{StateStorage, StoreError};

use crate::utils::js_error_text;

/// `StateStorage` over `window.localStorage`.
///
/// When storage is unavailable (disabled cookies, sandboxed iframe) reads
/// return nothing and writes are dropped, so the widget still works for the
/// current page load.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %js_error_text(&err), "localStorage access denied");
                None
            }
        });
        if inner.is_none() {
            tracing::warn!("localStorage unavailable, boss roster will not persist");
        }
        Self { inner }
    }
}

impl StateStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.inner.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %js_error_text(&err), "localStorage read failed");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.inner.as_ref() else {
            return Ok(());
        };
        storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: js_error_text(&err),
        })
    }
}
