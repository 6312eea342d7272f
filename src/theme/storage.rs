/// Durable key/value store for the serialized theme record.
///
/// Absence of a key is meaningful (follow-system mode), not an error, so
/// reads report `Option` and writes are best-effort.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use crate::error::ThemeError;
    use super::SettingsStore;

    /// Store backed by `window.localStorage`. Storage problems degrade to
    /// "absent" or a logged no-op and never reach the coordinator.
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        pub fn new() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        }
    }

    impl SettingsStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
        }

        fn set(&self, key: &str, value: &str) {
            match Self::storage() {
                Some(storage) => {
                    if let Err(e) = storage.set_item(key, value) {
                        log::warn!("{}", ThemeError::Storage(format!("writing {}: {:?}", key, e)));
                    }
                }
                None => log::warn!("{}", ThemeError::Storage("local storage unavailable".to_string())),
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
