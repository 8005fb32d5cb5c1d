// Localized strings
use std::collections::HashMap;

/// Key of the fallback text shown by browsers without <audio> support
pub const PLAYER_NOT_SUPPORTED: &str = "oui_player_html_player_not_supported";

/// Translated string lookup with placeholder substitution
pub trait Localizer {
    fn localize(&self, key: &str, placeholders: &[(&str, &str)]) -> String;
}

/// In-memory string table
#[derive(Debug, Clone)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Strings {
    /// Built-in table for a language; unknown languages fall back to English
    pub fn for_language(language: &str) -> Self {
        let entries: &[(&str, &str)] = match language {
            "fr" => &[(
                PLAYER_NOT_SUPPORTED,
                "Votre navigateur ne supporte pas l'élément {player}. \
                 Vous pouvez <a href=\"{src}\">télécharger {file}</a>.",
            )],
            _ => &[(
                PLAYER_NOT_SUPPORTED,
                "Your browser does not support the {player} element. \
                 You can <a href=\"{src}\">download {file}</a> instead.",
            )],
        };

        Self {
            table: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Add or replace a translation
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.insert(key.into(), value.into());
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl Localizer for Strings {
    fn localize(&self, key: &str, placeholders: &[(&str, &str)]) -> String {
        let template = match self.table.get(key) {
            Some(template) => template.as_str(),
            None => return key.to_string(),
        };

        placeholders
            .iter()
            .fold(template.to_string(), |text, (placeholder, value)| {
                text.replace(placeholder, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let strings = Strings::default();
        let text = strings.localize(
            PLAYER_NOT_SUPPORTED,
            &[("{player}", "&lt;audio&gt;"), ("{src}", "/a.mp3"), ("{file}", "a.mp3")],
        );
        assert_eq!(
            text,
            "Your browser does not support the &lt;audio&gt; element. \
             You can <a href=\"/a.mp3\">download a.mp3</a> instead."
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(Strings::default().localize("missing", &[]), "missing");
    }

    #[test]
    fn test_language_fallback_and_override() {
        let mut strings = Strings::for_language("xx");
        assert!(strings.localize(PLAYER_NOT_SUPPORTED, &[]).starts_with("Your browser"));

        strings.insert(PLAYER_NOT_SUPPORTED, "No {player}");
        assert_eq!(strings.localize(PLAYER_NOT_SUPPORTED, &[("{player}", "audio")]), "No audio");
    }

    #[test]
    fn test_french() {
        let text = Strings::for_language("fr").localize(PLAYER_NOT_SUPPORTED, &[("{file}", "a.mp3")]);
        assert!(text.contains("télécharger a.mp3"));
    }
}
