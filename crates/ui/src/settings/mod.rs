pub mod state;

pub use state::{AppearanceSettings, SettingsError, SettingsStore};
