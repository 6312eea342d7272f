pub mod applier;
pub mod coordinator;
pub mod settings;
pub mod storage;
pub mod system;
pub mod web;

// Re-export commonly used items
pub use applier::ThemeApplier;
pub use coordinator::{ ThemeCoordinator, ThemeMode };
pub use settings::ThemeSettings;
pub use storage::SettingsStore;
pub use system::SystemPreference;
