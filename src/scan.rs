//! Image preload scanning over raw HTML text.
//!
//! Textual pattern matching, not a structural parse: tolerant of malformed
//! markup, but the `src` attribute must precede the `data-preload` marker
//! inside the opening tag (the shape template authors write by convention).

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::TagDescriptor;

/// `<img ... src="..." ... data-preload ...>` within one opening tag.
static IMG_PRELOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*data-preload[^>]*>"#).unwrap());

/// `class="..."` attribute, for the dark-variant token check.
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).unwrap());

/// Scan raw HTML for `<img>` elements carrying the `data-preload` marker.
///
/// Emits one `as=image` preload descriptor per match, in document order,
/// followed by a second descriptor for the derived dark variant when the
/// element's class list contains the `has-dark` token.
pub fn scan_images(html: &str) -> Vec<TagDescriptor> {
    let mut tags = Vec::new();

    for caps in IMG_PRELOAD.captures_iter(html) {
        let tag_text = caps.get(0).map_or("", |m| m.as_str());
        let src = caps.get(1).map_or("", |m| m.as_str());

        log::trace!("preload image: {src}");
        tags.push(TagDescriptor::preload(src, "image"));

        if has_dark_class(tag_text) {
            // Extension-less sources have no derivable variant; skip the
            // second tag rather than preloading the base image twice.
            if let Some(dark_src) = dark_variant(src) {
                tags.push(TagDescriptor::preload(&dark_src, "image"));
            }
        }
    }

    tags
}

/// Whether the opening tag's class list contains the `has-dark` token.
fn has_dark_class(tag_text: &str) -> bool {
    CLASS_ATTR.captures(tag_text).is_some_and(|caps| {
        caps[1].split_whitespace().any(|token| token == "has-dark")
    })
}

/// Insert `-dark` before the final extension: `logo.png` -> `logo-dark.png`.
/// Returns `None` when the name carries no recognizable extension.
fn dark_variant(src: &str) -> Option<String> {
    let dot = src.rfind('.')?;
    let ext = &src[dot + 1..];
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(format!("{}-dark.{ext}", &src[..dot]))
}
