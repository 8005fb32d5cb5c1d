// Source reference patterns
//
// A `play` value lists one or more comma-separated references to audio
// files: numeric file ids, stored filenames or absolute URLs.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// How a source reference is resolved into a playable URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Numeric id of an uploaded file
    Id,
    /// Filename of an uploaded file
    Filename,
    /// Absolute URL, used as-is
    Url,
}

/// A classified source reference, before URL materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub identifier: String,
    pub kind: SourceKind,
}

impl SourceDescriptor {
    pub fn new(identifier: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
        }
    }
}

/// A matching expression and the capture group holding the identifier
pub struct Pattern {
    pub kind: SourceKind,
    pub scheme: Regex,
    pub id_group: usize,
}

/// Filename and URL patterns, in matching order
pub fn get_patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Both expressions are constant and known to compile.
        let filename = Regex::new(
            r"(?i)^(\S+\.(mp3|ogg|oga|wav|aac|flac))$",
        )
        .expect("filename pattern");
        let url = Regex::new(
            r"(?i)^((https?://(www\.)?)\S+\.(mp3|ogg|oga|wav|aac|flac))$",
        )
        .expect("url pattern");

        vec![
            Pattern { kind: SourceKind::Url, scheme: url, id_group: 1 },
            Pattern { kind: SourceKind::Filename, scheme: filename, id_group: 1 },
        ]
    })
}

/// Classify a single reference, or `None` if no pattern accepts it
pub fn classify_one(value: &str) -> Option<SourceDescriptor> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return Some(SourceDescriptor::new(value, SourceKind::Id));
    }

    // URL-like values only ever match the URL pattern.
    if is_url_like(value) {
        let url = &get_patterns()[0];
        return url
            .scheme
            .captures(value)
            .and_then(|caps| caps.get(url.id_group))
            .map(|m| SourceDescriptor::new(m.as_str(), url.kind));
    }

    get_patterns()[1..].iter().find_map(|pattern| {
        pattern
            .scheme
            .captures(value)
            .and_then(|caps| caps.get(pattern.id_group))
            .map(|m| SourceDescriptor::new(m.as_str(), pattern.kind))
    })
}

fn is_url_like(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Classify every comma-separated reference of a `play` value, in order.
///
/// References matching no pattern are dropped. A repeated reference only
/// counts once, at its first position.
pub fn classify(play: &str) -> Vec<SourceDescriptor> {
    let mut seen = HashSet::new();

    play.split(',')
        .filter(|item| !item.trim().is_empty())
        .filter_map(|item| {
            let descriptor = classify_one(item);
            if descriptor.is_none() {
                tracing::debug!(reference = item.trim(), "Ignoring unrecognized audio reference");
            }
            descriptor
        })
        .filter(|descriptor| seen.insert(descriptor.identifier.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id() {
        assert_eq!(
            classify_one("42"),
            Some(SourceDescriptor::new("42", SourceKind::Id))
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            classify_one("https://www.example.com/audio/track.MP3"),
            Some(SourceDescriptor::new(
                "https://www.example.com/audio/track.MP3",
                SourceKind::Url
            ))
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            classify_one("episode-01.flac"),
            Some(SourceDescriptor::new("episode-01.flac", SourceKind::Filename))
        );
    }

    #[test]
    fn test_url_with_unsupported_extension_is_rejected() {
        assert_eq!(classify_one("http://example.com/movie.mp4"), None);
        assert_eq!(classify_one("http://example.com/stream"), None);
    }

    #[test]
    fn test_filename_with_unsupported_extension_is_rejected() {
        assert_eq!(classify_one("notes.txt"), None);
        assert_eq!(classify_one("two words.mp3"), None);
    }

    #[test]
    fn test_classify_preserves_order() {
        let infos = classify("http://x/a.mp3, 7 ,b.ogg,,bogus");
        assert_eq!(
            infos,
            vec![
                SourceDescriptor::new("http://x/a.mp3", SourceKind::Url),
                SourceDescriptor::new("7", SourceKind::Id),
                SourceDescriptor::new("b.ogg", SourceKind::Filename),
            ]
        );
    }

    #[test]
    fn test_classify_drops_repeated_references() {
        let infos = classify("a.mp3, b.mp3, a.mp3,7, 7");
        assert_eq!(
            infos,
            vec![
                SourceDescriptor::new("a.mp3", SourceKind::Filename),
                SourceDescriptor::new("b.mp3", SourceKind::Filename),
                SourceDescriptor::new("7", SourceKind::Id),
            ]
        );
    }

    #[test]
    fn test_classify_empty() {
        assert!(classify("").is_empty());
        assert!(classify(" , ").is_empty());
    }
}
