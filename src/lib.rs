// oui_player audio provider
// Resolves uploaded files, filenames and URLs into HTML5 <audio> markup
pub mod db;
pub mod error;
pub mod i18n;
pub mod markup;
pub mod provider;
pub mod settings;
pub mod tags;

pub use error::{Error, Result};
pub use provider::{AudioProvider, InstanceConfig};
pub use settings::PlayerSettings;
