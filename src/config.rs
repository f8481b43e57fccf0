//! Per-build configuration for the preload transform.
//!
//! Passed explicitly on every invocation; the crate keeps no module-level
//! state. All fields deserialize with serde so hosts can embed the options
//! in their own config files, and the function-valued critical-asset shape
//! stays available for programmatic construction.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Options recognized by the transform. Everything is optional; the default
/// config produces no tags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    /// Literal image URLs to preload on every page, in order.
    pub images_to_preload: Vec<String>,
    /// Font files to preload, in order.
    pub fonts_to_preload: Vec<FontPreload>,
    /// Entry names whose JS output files are critical for first render.
    pub critical_js: CriticalAssets,
    /// Entry names whose CSS output files are critical for first render.
    pub critical_css: CriticalAssets,
    /// Emit preconnect hints for the two Google Fonts origins.
    pub preload_google_fonts: bool,
}

// ============================================================================
// Font preloads
// ============================================================================

/// A font resource to preload.
#[derive(Debug, Clone, Deserialize)]
pub struct FontPreload {
    /// URL of the font file (relative or absolute).
    pub href: String,
    /// MIME type; `font/woff2` when omitted and `as = "font"`.
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Preload destination. `style` covers stylesheet hrefs such as a
    /// Google Fonts CSS URL.
    #[serde(rename = "as", default)]
    pub destination: FontAs,
    /// Add the `crossorigin` attribute (required for cross-origin font
    /// fetches).
    #[serde(default)]
    pub crossorigin: bool,
}

/// `as` value for a font preload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontAs {
    #[default]
    Font,
    Style,
}

impl FontAs {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Style => "style",
        }
    }
}

// ============================================================================
// Critical assets
// ============================================================================

/// Page-identifier to entry-name resolver for the function-valued shape.
pub type CriticalAssetsFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// Critical-asset declaration: which logical entries a page needs.
///
/// A value that may be supplied directly, looked up per page, or computed
/// on demand. Resolved exactly once per page and asset kind, never branched
/// on repeatedly.
#[derive(Clone, Deserialize)]
#[serde(untagged)]
pub enum CriticalAssets {
    /// The same ordered entry list on every page.
    List(Vec<String>),
    /// Entry list keyed by canonical page identifier; pages absent from the
    /// map resolve to no entries.
    PerPage(FxHashMap<String, Vec<String>>),
    /// Computed from the page identifier. Programmatic only, not part of
    /// the serde surface.
    #[serde(skip)]
    Compute(Arc<CriticalAssetsFn>),
}

impl CriticalAssets {
    /// Function-valued spec from a closure.
    pub fn compute(f: impl Fn(&str) -> Vec<String> + Send + Sync + 'static) -> Self {
        Self::Compute(Arc::new(f))
    }

    /// Entry names for one page. A `PerPage` miss and the default both
    /// yield the empty list.
    pub fn entries_for(&self, page_id: &str) -> Cow<'_, [String]> {
        match self {
            Self::List(entries) => Cow::Borrowed(entries.as_slice()),
            Self::PerPage(map) => map
                .get(page_id)
                .map_or(Cow::Borrowed(&[][..]), |entries| {
                    Cow::Borrowed(entries.as_slice())
                }),
            Self::Compute(resolver) => Cow::Owned(resolver(page_id)),
        }
    }
}

impl Default for CriticalAssets {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl fmt::Debug for CriticalAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(entries) => f.debug_tuple("List").field(entries).finish(),
            Self::PerPage(map) => f.debug_tuple("PerPage").field(map).finish(),
            Self::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> PreloadConfig {
        toml::from_str(toml).expect("config should parse")
    }

    #[test]
    fn test_defaults() {
        let config = parse("");
        assert!(config.images_to_preload.is_empty());
        assert!(config.fonts_to_preload.is_empty());
        assert!(!config.preload_google_fonts);
        assert!(config.critical_js.entries_for("/index.html").is_empty());
    }

    #[test]
    fn test_flat_list_spec() {
        let config = parse(r#"critical_js = ["main", "vendor"]"#);
        let entries = config.critical_js.entries_for("/any.html");
        assert_eq!(entries.as_ref(), ["main", "vendor"]);
        // flat lists apply to every page
        assert_eq!(config.critical_js.entries_for("/other.html"), entries);
    }

    #[test]
    fn test_per_page_spec() {
        let config = parse(
            r#"
[critical_css]
"/index.html" = ["main"]
"/blog/index.html" = ["main", "blog"]
"#,
        );
        assert_eq!(
            config.critical_css.entries_for("/blog/index.html").as_ref(),
            ["main", "blog"]
        );
        assert!(config.critical_css.entries_for("/missing.html").is_empty());
    }

    #[test]
    fn test_compute_spec() {
        let spec = CriticalAssets::compute(|page_id| {
            if page_id.starts_with("/blog/") {
                vec!["blog".to_string()]
            } else {
                vec!["main".to_string()]
            }
        });
        assert_eq!(spec.entries_for("/blog/post.html").as_ref(), ["blog"]);
        assert_eq!(spec.entries_for("/index.html").as_ref(), ["main"]);
    }

    #[test]
    fn test_font_preload_defaults() {
        let config = parse(
            r#"
[[fonts_to_preload]]
href = "/fonts/inter.woff2"

[[fonts_to_preload]]
href = "https://fonts.googleapis.com/css2?family=Inter"
as = "style"
crossorigin = true
"#,
        );
        let fonts = &config.fonts_to_preload;
        assert_eq!(fonts[0].destination, FontAs::Font);
        assert!(fonts[0].mime_type.is_none());
        assert!(!fonts[0].crossorigin);
        assert_eq!(fonts[1].destination, FontAs::Style);
        assert!(fonts[1].crossorigin);
    }
}
