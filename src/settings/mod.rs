// Settings module
// Provider configuration and persisted site preferences

pub mod preferences;
pub mod settings;

pub use preferences::{pref_key, PreferenceLookup, Preferences};
pub use settings::{PlayerSettings, DEFAULT_NAMESPACE};
