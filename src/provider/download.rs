// Download URLs for stored files
use super::sources::UrlBuilder;
use crate::settings::PlayerSettings;

/// Builds `file_download` URLs for the site
#[derive(Debug, Clone)]
pub struct DownloadUrlBuilder {
    site_url: String,
    clean_urls: bool,
}

impl DownloadUrlBuilder {
    pub fn new(site_url: &str, clean_urls: bool) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            clean_urls,
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self::new(&settings.site_url, settings.clean_urls)
    }
}

impl UrlBuilder for DownloadUrlBuilder {
    fn file_download_url(&self, id: i64, filename: &str) -> String {
        if self.clean_urls {
            format!(
                "{}/file_download/{}/{}",
                self.site_url,
                id,
                urlencoding::encode(filename)
            )
        } else {
            format!("{}/index.php?s=file_download&id={}", self.site_url, id)
        }
    }
}
