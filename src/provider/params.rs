// Player parameter resolution
use super::schema::ParamSpec;
use super::InstanceConfig;
use crate::markup::escape_attr;
use crate::settings::{pref_key, PreferenceLookup};

/// Build the attribute tokens for the player element.
///
/// Walks the schema in declaration order. A parameter is emitted when the
/// instance sets it, or when the instance leaves it empty and the site
/// preference differs from the schema default. Boolean parameters become
/// bare flags (`loop`), others `name="value"`.
pub fn resolve_parameters(
    config: &InstanceConfig,
    schema: &[ParamSpec],
    prefs: &dyn PreferenceLookup,
    namespace: &str,
) -> Vec<String> {
    let mut params = Vec::new();

    for spec in schema {
        let value = config.get(spec.name).unwrap_or("");
        let pref = prefs.get_pref(&pref_key(namespace, spec.name));

        let effective = if value.is_empty() && pref != spec.default {
            pref.as_str()
        } else if !value.is_empty() {
            value
        } else {
            continue;
        };

        if spec.valid.is_boolean() {
            params.push(spec.name.to_string());
        } else {
            params.push(format!("{}=\"{}\"", spec.name, escape_attr(effective)));
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::schema::PARAMS;
    use std::collections::HashMap;

    const NS: &str = "oui_player_audio";

    fn defaults() -> impl Fn(&str) -> String {
        |key: &str| {
            let name = key.strip_prefix("oui_player_audio_").unwrap_or(key);
            crate::provider::schema::default_for(name)
                .unwrap_or("")
                .to_string()
        }
    }

    fn prefs_with(overrides: &[(&str, &str)]) -> impl Fn(&str) -> String {
        let overrides: HashMap<String, String> = overrides
            .iter()
            .map(|(k, v)| (pref_key(NS, k), v.to_string()))
            .collect();
        let fallback = defaults();
        move |key: &str| overrides.get(key).cloned().unwrap_or_else(|| fallback(key))
    }

    #[test]
    fn test_defaults_produce_nothing() {
        let params = resolve_parameters(&InstanceConfig::new(), PARAMS, &defaults(), NS);
        assert!(params.is_empty());
    }

    #[test]
    fn test_volume_value() {
        let config = InstanceConfig::from_pairs([("volume", "0.5")]);
        let params = resolve_parameters(&config, PARAMS, &defaults(), NS);
        assert_eq!(params, vec!["volume=\"0.5\""]);
        assert_eq!(params.iter().filter(|p| *p == "volume=\"0.5\"").count(), 1);
    }

    #[test]
    fn test_booleans_are_bare_flags() {
        let config = InstanceConfig::from_pairs([("autoplay", "1"), ("muted", "1")]);
        let prefs = prefs_with(&[("controls", "1"), ("loop", "1")]);
        let params = resolve_parameters(&config, PARAMS, &prefs, NS);
        assert_eq!(params, vec!["autoplay", "controls", "loop", "muted"]);
        assert!(params.iter().all(|p| !p.contains('=')));
    }

    #[test]
    fn test_explicit_boolean_value_is_emitted_as_flag() {
        let config = InstanceConfig::from_pairs([("loop", "0")]);
        let params = resolve_parameters(&config, PARAMS, &defaults(), NS);
        assert_eq!(params, vec!["loop"]);
    }

    #[test]
    fn test_schema_order_is_kept() {
        let config = InstanceConfig::from_pairs([
            ("volume", "0.8"),
            ("preload", "none"),
            ("controls", "1"),
        ]);
        let params = resolve_parameters(&config, PARAMS, &defaults(), NS);
        assert_eq!(params, vec!["controls", "preload=\"none\"", "volume=\"0.8\""]);
    }

    #[test]
    fn test_pref_used_when_value_missing() {
        let prefs = prefs_with(&[("preload", "metadata")]);
        let params = resolve_parameters(&InstanceConfig::new(), PARAMS, &prefs, NS);
        assert_eq!(params, vec!["preload=\"metadata\""]);
    }

    #[test]
    fn test_value_overrides_pref() {
        let prefs = prefs_with(&[("preload", "metadata")]);
        let config = InstanceConfig::from_pairs([("preload", "none")]);
        let params = resolve_parameters(&config, PARAMS, &prefs, NS);
        assert_eq!(params, vec!["preload=\"none\""]);
    }

    #[test]
    fn test_value_equal_to_default_is_still_emitted() {
        let config = InstanceConfig::from_pairs([("preload", "auto")]);
        let params = resolve_parameters(&config, PARAMS, &defaults(), NS);
        assert_eq!(params, vec!["preload=\"auto\""]);
    }

    #[test]
    fn test_unvalidated_values_pass_through_escaped() {
        let config = InstanceConfig::from_pairs([("volume", "loud\"")]);
        let params = resolve_parameters(&config, PARAMS, &defaults(), NS);
        assert_eq!(params, vec!["volume=\"loud&quot;\""]);
    }

    #[test]
    fn test_namespace_drives_pref_keys() {
        let prefs = |key: &str| {
            if key == "custom_autoplay" {
                "1".to_string()
            } else {
                crate::provider::schema::default_for(key.trim_start_matches("custom_"))
                    .unwrap_or("")
                    .to_string()
            }
        };
        let params = resolve_parameters(&InstanceConfig::new(), PARAMS, &prefs, "custom");
        assert_eq!(params, vec!["autoplay"]);
    }
}
