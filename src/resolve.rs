//! Critical-asset resolution against the build's output-file table.

use crate::config::CriticalAssets;
use crate::matcher::matches_entry;
use crate::page::PageId;

/// Asset kind for critical preloads, tied to its file extension and the
/// `as` attribute value browsers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Style,
    Script,
}

impl AssetKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Style => ".css",
            Self::Script => ".js",
        }
    }

    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Script => "script",
        }
    }
}

/// Resolve a critical-asset spec to the concrete output files it names.
///
/// Entry names resolve in declaration order; within one entry name the
/// output table's own order is preserved, and every matching file is
/// emitted (code-split chunks included). Overlapping entry names can yield
/// the same file twice; that duplication is observable in the final tag
/// count and is kept, not silently collapsed.
pub fn resolve_critical(
    spec: &CriticalAssets,
    page_id: &PageId,
    output_files: &[String],
    kind: AssetKind,
) -> Vec<String> {
    let entries = spec.entries_for(page_id.as_str());
    let mut matched = Vec::new();

    for entry in entries.iter() {
        let before = matched.len();
        for file in output_files {
            if file.ends_with(kind.extension()) && matches_entry(file, entry) {
                matched.push(file.clone());
            }
        }
        if matched.len() == before {
            // likely a typo in the config; degrade, never fail the build
            log::warn!(
                "critical {} entry `{entry}` matched no output file on {page_id}",
                kind.as_value()
            );
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs() -> Vec<String> {
        [
            "assets/main-abc.js",
            "assets/vendor-def.js",
            "assets/main-abc.css",
        ]
        .map(String::from)
        .to_vec()
    }

    fn page() -> PageId {
        PageId::from("/index.html")
    }

    #[test]
    fn test_flat_list_per_kind() {
        let spec = CriticalAssets::List(vec!["main".to_string()]);
        let js = resolve_critical(&spec, &page(), &outputs(), AssetKind::Script);
        let css = resolve_critical(&spec, &page(), &outputs(), AssetKind::Style);
        assert_eq!(js, ["assets/main-abc.js"]);
        assert_eq!(css, ["assets/main-abc.css"]);
    }

    #[test]
    fn test_unmatched_entry_is_empty() {
        let spec = CriticalAssets::List(vec!["missing".to_string()]);
        assert!(resolve_critical(&spec, &page(), &outputs(), AssetKind::Script).is_empty());
    }

    #[test]
    fn test_per_page_miss_is_empty() {
        let mut map = rustc_hash::FxHashMap::default();
        map.insert("/a.html".to_string(), vec!["main".to_string()]);
        map.insert("/b.html".to_string(), Vec::new());
        let spec = CriticalAssets::PerPage(map);

        let b = resolve_critical(&spec, &PageId::from("/b.html"), &outputs(), AssetKind::Script);
        assert!(b.is_empty());
        let a = resolve_critical(&spec, &PageId::from("/a.html"), &outputs(), AssetKind::Script);
        assert_eq!(a, ["assets/main-abc.js"]);
        let c = resolve_critical(&spec, &PageId::from("/c.html"), &outputs(), AssetKind::Script);
        assert!(c.is_empty());
    }

    #[test]
    fn test_table_order_preserved_within_entry() {
        let files = ["assets/main-2.js", "assets/main-1.js"].map(String::from);
        let spec = CriticalAssets::List(vec!["main".to_string()]);
        let js = resolve_critical(&spec, &page(), &files, AssetKind::Script);
        assert_eq!(js, ["assets/main-2.js", "assets/main-1.js"]);
    }

    #[test]
    fn test_overlapping_entries_keep_duplicates() {
        let files = ["assets/main-abc.js".to_string()];
        let spec = CriticalAssets::List(vec!["main".to_string(), "main".to_string()]);
        let js = resolve_critical(&spec, &page(), &files, AssetKind::Script);
        assert_eq!(js, ["assets/main-abc.js", "assets/main-abc.js"]);
    }

    #[test]
    fn test_idempotent() {
        let spec = CriticalAssets::List(vec!["main".to_string(), "vendor".to_string()]);
        let first = resolve_critical(&spec, &page(), &outputs(), AssetKind::Script);
        let second = resolve_critical(&spec, &page(), &outputs(), AssetKind::Script);
        assert_eq!(first, second);
        assert_eq!(first, ["assets/main-abc.js", "assets/vendor-def.js"]);
    }
}
