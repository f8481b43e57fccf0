//! Build-time resource-hint injection for generated HTML.
//!
//! Runs once per generated page, after the page content and the build's
//! output-file table are both known: scans the raw HTML for preload-eligible
//! images, resolves critical JS/CSS entry names against the output table,
//! and produces an ordered list of `<link rel="preload">` /
//! `<link rel="preconnect">` tag descriptors for the document `<head>`.
//!
//! The transform is pure: no I/O, no network, no shared mutable state. It is
//! safe to call concurrently for independent pages. Hosts that want the
//! splice done for them can call [`transform_page`]; hosts with their own
//! head-injection machinery use [`build_tags`] and serialize the descriptors
//! themselves.

mod builder;
mod config;
mod error;
mod inject;
mod matcher;
mod page;
mod resolve;
mod scan;
mod tag;

pub use builder::build_tags;
pub use config::{CriticalAssets, CriticalAssetsFn, FontAs, FontPreload, PreloadConfig};
pub use error::PreloadError;
pub use inject::prepend_to_head;
pub use matcher::matches_entry;
pub use page::{PageId, canonical_page_id};
pub use resolve::{AssetKind, resolve_critical};
pub use scan::scan_images;
pub use tag::{Attrs, InjectTo, TagDescriptor};

use std::borrow::Cow;
use std::path::Path;

/// One-call entry point: compute every hint tag for a page and splice the
/// result into its `<head>`.
///
/// `output_files` is the build's output table in its own iteration order
/// (only the names are needed); `page_path` must live under `site_root`.
/// Pages that produce no tags come back borrowed and unchanged.
pub fn transform_page<'a>(
    html: &'a str,
    page_path: &Path,
    site_root: &Path,
    output_files: &[String],
    config: &PreloadConfig,
) -> Result<Cow<'a, str>, PreloadError> {
    let page_id = canonical_page_id(page_path, site_root)?;
    let tags = build_tags(html, &page_id, output_files, config);
    Ok(prepend_to_head(html, &tags))
}
