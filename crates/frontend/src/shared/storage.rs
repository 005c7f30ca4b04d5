//! Persisted key/value storage.
//!
//! Browser storage is treated as infallible by callers: failures are logged
//! and otherwise ignored.

use web_sys::window;

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("localStorage.setItem({}) failed: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not saved", key),
        }
    }

    fn remove(&self, key: &str) {
        match get_local_storage() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage.removeItem({}) failed: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not removed", key),
        }
    }
}
