// Extension to MIME type table for <source> elements

/// MIME types by lowercase file extension.
///
/// The ogg/oga/wav entries use `video/*` types. Browsers accept them and
/// existing markup depends on them, so they are kept as-is.
const MIME_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mp3"),
    ("ogg", "video/ogg"),
    ("oga", "video/ogg"),
    ("wav", "video/wave"),
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
];

/// Look up the MIME type for an extension (case-insensitive)
pub fn get_mime_type(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Extension of the path portion of a source URL or filename
pub fn extension_of(source: &str) -> Option<&str> {
    let path = source
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(source);
    let file = path.rsplit('/').next().unwrap_or(path);

    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// MIME type for a source, derived from its extension
pub fn mime_type_for(source: &str) -> Option<&'static str> {
    let mime = extension_of(source).and_then(get_mime_type);
    if mime.is_none() {
        tracing::debug!(source, "No MIME type known for source extension");
    }
    mime
}
