//! Link-tag descriptors and their HTML serialization.

use std::fmt;

/// Where a tag should be spliced into the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InjectTo {
    /// As early as possible inside `<head>`; list order is preserved, so
    /// the first descriptor in a batch ends up closest to the top.
    #[default]
    HeadPrepend,
}

/// Insertion-ordered attribute list.
///
/// Order is part of the output contract (reproducible builds snapshot the
/// serialized tags). An empty value serializes as a bare attribute:
/// `crossorigin`, not `crossorigin=""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// Bare attribute (presence only).
    pub fn flag(self, name: &'static str) -> Self {
        self.set(name, "")
    }

    /// Value of `name`, `Some("")` for bare attributes.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single tag to splice into the document head. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    pub tag: &'static str,
    pub inject_to: InjectTo,
    pub attrs: Attrs,
}

impl TagDescriptor {
    /// A head-prepend `<link>` with the given attributes.
    pub fn link(attrs: Attrs) -> Self {
        Self {
            tag: "link",
            inject_to: InjectTo::HeadPrepend,
            attrs,
        }
    }

    /// `rel=preload` link for `href` with the given destination.
    pub(crate) fn preload(href: &str, as_value: &'static str) -> Self {
        Self::link(
            Attrs::new()
                .set("rel", "preload")
                .set("href", href)
                .set("as", as_value),
        )
    }
}

impl fmt::Display for TagDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in self.attrs.iter() {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"")?;
                escape_attr(f, value)?;
                write!(f, "\"")?;
            }
        }
        write!(f, ">")
    }
}

/// Minimal escaping for double-quoted attribute values.
fn escape_attr(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            '<' => f.write_str("&lt;")?,
            _ => fmt::Write::write_char(f, c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_order_preserved() {
        let tag = TagDescriptor::preload("/a.png", "image");
        let names: Vec<_> = tag.attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["rel", "href", "as"]);
    }

    #[test]
    fn test_bare_attribute_serialization() {
        let tag = TagDescriptor::link(
            Attrs::new()
                .set("rel", "preconnect")
                .set("href", "https://fonts.gstatic.com")
                .flag("crossorigin"),
        );
        assert_eq!(
            tag.to_string(),
            r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#
        );
        assert_eq!(tag.attrs.get("crossorigin"), Some(""));
        assert_eq!(tag.attrs.get("as"), None);
    }

    #[test]
    fn test_attr_value_escaping() {
        let tag = TagDescriptor::preload("/a.png?x=1&y=\"2\"", "image");
        assert_eq!(
            tag.to_string(),
            r#"<link rel="preload" href="/a.png?x=1&amp;y=&quot;2&quot;" as="image">"#
        );
    }
}
