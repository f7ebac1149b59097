//! Widget Configuration

/// Default `localStorage` key for the list snapshot
pub const DEFAULT_STORAGE_KEY: &str = "todo-list.items";

/// Runtime settings for one widget instance
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Key the snapshot is stored under; distinct keys give independent lists
    pub storage_key: String,
    /// Console log level
    pub log_level: log::Level,
    /// How long the storage warning banner stays up (ms)
    pub warning_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            warning_timeout_ms: 6_000,
        }
    }
}

impl AppConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
