// CMS tag handlers
//
// `<txp:oui_audio play="..." />` renders a player,
// `<txp:oui_if_audio play="...">...</txp:oui_if_audio>` tests for audio references.

use crate::provider::{AudioProvider, InstanceConfig};

/// Tag attributes, as name/value pairs
pub type Atts<'a> = [(&'a str, &'a str)];

/// Split tag attributes into the instance config and the wrapping options
fn split_atts(atts: &Atts<'_>) -> (InstanceConfig, Option<String>, Option<String>) {
    let mut config = InstanceConfig::new();
    let mut wraptag = None;
    let mut class = None;

    for (name, value) in atts {
        match *name {
            "wraptag" => wraptag = Some(value.to_string()),
            "class" => class = Some(value.to_string()),
            // Always the audio provider
            "provider" => {}
            _ => config.set(*name, *value),
        }
    }

    (config, wraptag, class)
}

/// Render the player, or an empty string when nothing is playable
pub fn audio(provider: &AudioProvider, atts: &Atts<'_>) -> String {
    let (config, wraptag, class) = split_atts(atts);
    provider
        .player(&config, wraptag.as_deref(), class.as_deref())
        .unwrap_or_default()
}

/// `content` when the `play` attribute names audio, an empty string otherwise
pub fn if_audio(provider: &AudioProvider, atts: &Atts<'_>, content: &str) -> String {
    let (config, _, _) = split_atts(atts);
    if provider.is_audio(config.play()) {
        content.to_string()
    } else {
        String::new()
    }
}
