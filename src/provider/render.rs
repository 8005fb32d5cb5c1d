// <audio> markup assembly
use super::mime::mime_type_for;
use super::schema::GLUE;
use crate::i18n::{Localizer, PLAYER_NOT_SUPPORTED};
use crate::markup::{escape_attr, wrap_in_tag};

/// Player sizing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<String>,
}

impl Dimensions {
    /// CSS width, with `px` appended to bare numbers
    pub fn css_width(&self) -> Option<String> {
        let width = self.width.as_deref()?.trim();
        if width.is_empty() {
            return None;
        }
        if width.parse::<f64>().map_or(false, f64::is_finite) {
            Some(format!("{}px", width))
        } else {
            Some(width.to_string())
        }
    }
}

/// Last path segment of a source URL
fn basename(src: &str) -> &str {
    let path = src.trim_end_matches('/');
    path.rsplit('/').next().unwrap_or(path)
}

/// Assemble the player element.
///
/// The first source is the element's `src`; the rest become `<source>`
/// children. Returns `None` when there is nothing to play.
pub fn render(
    sources: &[String],
    params: &[String],
    dims: &Dimensions,
    localizer: &dyn Localizer,
    wrap_tag: Option<&str>,
    class: Option<&str>,
) -> Option<String> {
    let (src, rest) = sources.split_first()?;

    let source_tags: Vec<String> = rest
        .iter()
        .map(|source| {
            format!(
                "<source src=\"{}\" type=\"{}\">",
                escape_attr(source),
                mime_type_for(source).unwrap_or("")
            )
        })
        .collect();

    let style = dims
        .css_width()
        .map(|width| format!(" style=\"width:{}\"", escape_attr(&width)))
        .unwrap_or_default();

    let attrs = if params.is_empty() {
        String::new()
    } else {
        format!(" {}", params.join(GLUE))
    };

    let children = if source_tags.is_empty() {
        String::new()
    } else {
        format!("\n{}", source_tags.join("\n"))
    };

    let escaped_src = escape_attr(src);
    let escaped_file = escape_attr(basename(src));
    let fallback = localizer.localize(
        PLAYER_NOT_SUPPORTED,
        &[
            ("{player}", "&lt;audio&gt;"),
            ("{src}", escaped_src.as_str()),
            ("{file}", escaped_file.as_str()),
        ],
    );

    let player = format!(
        "<audio src=\"{}\"{}{}>{}\n{}\n</audio>",
        escaped_src,
        style,
        attrs,
        children,
        fallback
    );

    match wrap_tag.filter(|tag| !tag.is_empty()) {
        Some(tag) => Some(wrap_in_tag(&player, tag, class.unwrap_or(""))),
        None => Some(player),
    }
}
