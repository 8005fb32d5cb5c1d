// Source resolution: classified references to absolute URLs
use super::patterns::{SourceDescriptor, SourceKind};
use crate::error::Result;

/// Stored-file metadata needed to build a download URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub id: i64,
    pub filename: String,
}

/// Predicate for a stored-file lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileQuery<'a> {
    Id(i64),
    Filename(&'a str),
}

/// Resolves stored-file metadata.
///
/// Only files created at or before `cutoff` (unix seconds) are visible.
pub trait FileLookup {
    fn fetch_file(&self, query: FileQuery<'_>, cutoff: i64) -> Result<Option<FileInfo>>;
}

/// Builds the public download URL of a stored file
pub trait UrlBuilder {
    fn file_download_url(&self, id: i64, filename: &str) -> String;
}

/// Resolve every descriptor to a URL, keeping input order.
///
/// URLs pass through untouched. Ids and filenames are looked up in the file
/// store; a miss or a failed lookup drops that entry without affecting the
/// others.
pub fn resolve_sources(
    infos: &[SourceDescriptor],
    files: &dyn FileLookup,
    urls: &dyn UrlBuilder,
    cutoff: i64,
) -> Vec<String> {
    let mut sources = Vec::with_capacity(infos.len());

    for SourceDescriptor { identifier, kind } in infos {
        let query = match kind {
            SourceKind::Url => {
                sources.push(identifier.clone());
                continue;
            }
            SourceKind::Id => match identifier.parse::<i64>() {
                Ok(id) => FileQuery::Id(id),
                Err(_) => {
                    tracing::warn!(identifier = %identifier, "Audio file id out of range");
                    continue;
                }
            },
            SourceKind::Filename => FileQuery::Filename(identifier),
        };

        match files.fetch_file(query, cutoff) {
            Ok(Some(file)) => sources.push(urls.file_download_url(file.id, &file.filename)),
            Ok(None) => {
                tracing::warn!(identifier = %identifier, ?kind, "No visible audio file found");
            }
            Err(e) => {
                tracing::warn!(identifier = %identifier, error = %e, "Audio file lookup failed");
            }
        }
    }

    sources
}
