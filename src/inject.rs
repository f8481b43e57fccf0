//! Head-prepend splicing of serialized tags into raw HTML text.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::tag::TagDescriptor;

/// Opening `<head>` tag, attributes and case tolerated.
static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(\s[^>]*)?>").unwrap());

/// Splice serialized tags immediately after the opening `<head>` tag.
///
/// List order is preserved: the first descriptor ends up closest to the top
/// of the head. Documents without a `<head>` are returned unchanged rather
/// than failing the build, as is an empty tag list.
pub fn prepend_to_head<'a>(html: &'a str, tags: &[TagDescriptor]) -> Cow<'a, str> {
    if tags.is_empty() {
        return Cow::Borrowed(html);
    }
    let Some(head) = HEAD_OPEN.find(html) else {
        log::warn!("no <head> in document; {} hint tags dropped", tags.len());
        return Cow::Borrowed(html);
    };

    let mut block = String::new();
    for tag in tags {
        let _ = write!(block, "\n{tag}");
    }

    let mut out = String::with_capacity(html.len() + block.len());
    out.push_str(&html[..head.end()]);
    out.push_str(&block);
    out.push_str(&html[head.end()..]);
    Cow::Owned(out)
}
