use crate::shared::constants::local_storage::{AUTH_TOKEN, IS_LOGGED_IN, REFRESH_AUTH_TOKEN};
use crate::shared::storage::KeyValueStorage;

/// Keys holding the persisted session, in removal order.
pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN, IS_LOGGED_IN, REFRESH_AUTH_TOKEN];

/// Clear all persisted session keys.
pub fn clear_session<S: KeyValueStorage>(storage: &S) {
    for key in SESSION_KEYS {
        storage.remove(key);
    }
}
