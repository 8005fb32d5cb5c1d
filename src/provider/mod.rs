// Audio provider
// Resolves audio references into an HTML5 <audio> player

pub mod download;
pub mod mime;
pub mod params;
pub mod patterns;
pub mod render;
pub mod schema;
pub mod sources;

use std::collections::BTreeMap;

use crate::db::DatabaseConnection;
use crate::i18n::{Localizer, Strings};
use crate::settings::{PlayerSettings, PreferenceLookup, Preferences};

pub use download::DownloadUrlBuilder;
pub use patterns::{SourceDescriptor, SourceKind};
pub use render::Dimensions;
pub use sources::{FileInfo, FileLookup, FileQuery, UrlBuilder};

/// Per-render player attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceConfig {
    values: BTreeMap<String, String>,
}

impl InstanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// The `play` attribute: comma-separated audio references
    pub fn play(&self) -> &str {
        self.get("play").unwrap_or("")
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.get("width").map(str::to_string),
        }
    }
}

/// The audio provider with its collaborators
pub struct AudioProvider {
    namespace: String,
    prefs: Box<dyn PreferenceLookup + Send + Sync>,
    files: Box<dyn FileLookup + Send + Sync>,
    urls: Box<dyn UrlBuilder + Send + Sync>,
    strings: Box<dyn Localizer + Send + Sync>,
}

impl AudioProvider {
    pub fn new(
        namespace: impl Into<String>,
        prefs: impl PreferenceLookup + Send + Sync + 'static,
        files: impl FileLookup + Send + Sync + 'static,
        urls: impl UrlBuilder + Send + Sync + 'static,
        strings: impl Localizer + Send + Sync + 'static,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            prefs: Box::new(prefs),
            files: Box::new(files),
            urls: Box::new(urls),
            strings: Box::new(strings),
        }
    }

    /// Wire the provider to a settings file and a SQLite file store
    pub fn from_settings(settings: &PlayerSettings, db: DatabaseConnection) -> Self {
        Self::new(
            settings.namespace.clone(),
            Preferences::from_settings(settings),
            db,
            DownloadUrlBuilder::from_settings(settings),
            Strings::for_language(&settings.language),
        )
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Attribute tokens for values set on the instance or changed site-wide
    pub fn player_params(&self, config: &InstanceConfig) -> Vec<String> {
        params::resolve_parameters(config, schema::PARAMS, self.prefs.as_ref(), &self.namespace)
    }

    /// Classified references of the instance's `play` attribute
    pub fn infos(&self, config: &InstanceConfig) -> Vec<SourceDescriptor> {
        patterns::classify(config.play())
    }

    /// Playable URLs, resolving stored files visible now
    pub fn sources(&self, config: &InstanceConfig) -> Vec<String> {
        self.sources_at(config, chrono::Utc::now().timestamp())
    }

    /// Playable URLs, resolving stored files created at or before `cutoff`
    pub fn sources_at(&self, config: &InstanceConfig, cutoff: i64) -> Vec<String> {
        sources::resolve_sources(
            &self.infos(config),
            self.files.as_ref(),
            self.urls.as_ref(),
            cutoff,
        )
    }

    /// Player markup, or `None` when no source resolves
    pub fn player(
        &self,
        config: &InstanceConfig,
        wrap_tag: Option<&str>,
        class: Option<&str>,
    ) -> Option<String> {
        self.player_at(config, wrap_tag, class, chrono::Utc::now().timestamp())
    }

    pub fn player_at(
        &self,
        config: &InstanceConfig,
        wrap_tag: Option<&str>,
        class: Option<&str>,
        cutoff: i64,
    ) -> Option<String> {
        let sources = self.sources_at(config, cutoff);
        if sources.is_empty() {
            tracing::debug!(play = config.play(), "No playable audio source");
            return None;
        }

        render::render(
            &sources,
            &self.player_params(config),
            &config.dimensions(),
            self.strings.as_ref(),
            wrap_tag,
            class,
        )
    }

    /// Whether `play` holds at least one audio reference
    pub fn is_audio(&self, play: &str) -> bool {
        !patterns::classify(play).is_empty()
    }
}
