//! Browser Storage
//!
//! `Storage` backed by `window.localStorage`.

use todo_store::{PersistError, PersistResult, Storage};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    // Looked up on every call so the type stays Send + Sync.
    fn local_storage() -> PersistResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| PersistError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistError::Unavailable("localStorage disabled".to_string()))
    }
}

impl Storage for BrowserStorage {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| PersistError::Read(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> PersistResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}
