// Site-wide preference lookup
use std::collections::BTreeMap;

use super::settings::PlayerSettings;
use crate::provider::schema;

/// Source of persisted site preferences
pub trait PreferenceLookup {
    /// Stored value for `key`, or its default when nothing is stored
    fn get_pref(&self, key: &str) -> String;
}

impl<F> PreferenceLookup for F
where
    F: Fn(&str) -> String,
{
    fn get_pref(&self, key: &str) -> String {
        self(key)
    }
}

/// Preference key of a player parameter
pub fn pref_key(namespace: &str, param: &str) -> String {
    format!("{}_{}", namespace, param)
}

/// Preferences backed by the settings file
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    namespace: String,
    values: BTreeMap<String, String>,
}

impl Preferences {
    pub fn new(namespace: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        Self {
            namespace: namespace.into(),
            values,
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self::new(settings.namespace.clone(), settings.prefs.clone())
    }

    /// Schema default for a key in this namespace
    fn default_for(&self, key: &str) -> Option<&'static str> {
        let param = key
            .strip_prefix(self.namespace.as_str())?
            .strip_prefix('_')?;
        schema::default_for(param)
    }
}

impl PreferenceLookup for Preferences {
    fn get_pref(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(value) => value.clone(),
            None => self.default_for(key).unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_key() {
        assert_eq!(pref_key("oui_player_audio", "loop"), "oui_player_audio_loop");
    }

    #[test]
    fn test_stored_value_wins() {
        let mut values = BTreeMap::new();
        values.insert("site_preload".to_string(), "none".to_string());
        let prefs = Preferences::new("site", values);
        assert_eq!(prefs.get_pref("site_preload"), "none");
    }

    #[test]
    fn test_falls_back_to_schema_default() {
        let prefs = Preferences::new("site", BTreeMap::new());
        assert_eq!(prefs.get_pref("site_preload"), "auto");
        assert_eq!(prefs.get_pref("site_autoplay"), "0");
        assert_eq!(prefs.get_pref("site_volume"), "");
    }

    #[test]
    fn test_foreign_keys_are_empty() {
        let prefs = Preferences::new("site", BTreeMap::new());
        assert_eq!(prefs.get_pref("other_preload"), "");
        assert_eq!(prefs.get_pref("sitepreload"), "");
        assert_eq!(prefs.get_pref("site_unknown"), "");
    }

    #[test]
    fn test_from_settings() {
        let mut settings = PlayerSettings::default();
        settings.set_pref("muted", "1");
        let prefs = Preferences::from_settings(&settings);
        assert_eq!(prefs.get_pref("oui_player_audio_muted"), "1");
        assert_eq!(prefs.get_pref("oui_player_audio_loop"), "0");
    }
}
