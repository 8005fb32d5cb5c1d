// Settings management and persistence
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::preferences::pref_key;
use crate::error::Result;
use crate::provider::schema::PARAMS;

/// Preference key prefix used when none is configured
pub const DEFAULT_NAMESPACE: &str = "oui_player_audio";

/// Provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub version: i32, // Settings schema version for future migrations
    /// Prefix of every preference key (`<namespace>_<param>`)
    pub namespace: String,
    /// Base URL of the site serving file downloads
    pub site_url: String,
    /// `/file_download/<id>/<name>` when true, `index.php?s=file_download` otherwise
    pub clean_urls: bool,
    pub language: String,
    /// Persisted site-wide preference values, by full key
    pub prefs: BTreeMap<String, String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            version: 1,
            namespace: DEFAULT_NAMESPACE.to_string(),
            site_url: String::new(),
            clean_urls: true,
            language: "en".to_string(),
            prefs: BTreeMap::new(),
        }
    }
}

impl PlayerSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &Path) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load(app_dir: &Path) -> Result<Self> {
        let path = Self::get_settings_path(app_dir);

        if !path.exists() {
            tracing::info!(path = %path.display(), "No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: PlayerSettings = serde_json::from_str(&content)?;

        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        fs::create_dir_all(app_dir)?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;

        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Register every player parameter with its schema default.
    ///
    /// Existing values are left alone. Returns the number of keys added.
    pub fn install_default_prefs(&mut self) -> usize {
        let mut added = 0;
        for spec in PARAMS {
            let key = pref_key(&self.namespace, spec.name);
            if !self.prefs.contains_key(&key) {
                self.prefs.insert(key, spec.default.to_string());
                added += 1;
            }
        }
        added
    }

    /// Set the site-wide preference for a player parameter
    pub fn set_pref(&mut self, param: &str, value: impl Into<String>) {
        let key = pref_key(&self.namespace, param);
        self.prefs.insert(key, value.into());
    }
}
