//! Tag assembly: merge every hint source into one ordered list.

use crate::config::{FontAs, PreloadConfig};
use crate::page::PageId;
use crate::resolve::{AssetKind, resolve_critical};
use crate::scan::scan_images;
use crate::tag::{Attrs, TagDescriptor};

/// Origins the Google Fonts preconnect hints point at.
const GOOGLE_FONTS_ORIGINS: [&str; 2] = [
    "https://fonts.googleapis.com",
    "https://fonts.gstatic.com",
];

/// Build the full ordered tag list for one page.
///
/// The order is the priority signal browsers act on, so it is a contract:
/// scanned image preloads, configured image preloads, Google Fonts
/// preconnects, font preloads, critical CSS, then critical JS. Identical
/// inputs always produce the identical list.
pub fn build_tags(
    html: &str,
    page_id: &PageId,
    output_files: &[String],
    config: &PreloadConfig,
) -> Vec<TagDescriptor> {
    let mut tags = scan_images(html);

    for image_url in &config.images_to_preload {
        tags.push(TagDescriptor::preload(image_url, "image"));
    }

    if config.preload_google_fonts {
        for origin in GOOGLE_FONTS_ORIGINS {
            tags.push(TagDescriptor::link(
                Attrs::new()
                    .set("rel", "preconnect")
                    .set("href", origin)
                    .flag("crossorigin"),
            ));
        }
    }

    for font in &config.fonts_to_preload {
        let mut attrs = Attrs::new()
            .set("rel", "preload")
            .set("href", font.href.as_str())
            .set("as", font.destination.as_str());
        if font.destination == FontAs::Font {
            attrs = attrs.set("type", font.mime_type.as_deref().unwrap_or("font/woff2"));
        }
        if font.crossorigin {
            attrs = attrs.flag("crossorigin");
        }
        tags.push(TagDescriptor::link(attrs));
    }

    // critical CSS before critical JS
    for kind in [AssetKind::Style, AssetKind::Script] {
        let spec = match kind {
            AssetKind::Style => &config.critical_css,
            AssetKind::Script => &config.critical_js,
        };
        for file in resolve_critical(spec, page_id, output_files, kind) {
            tags.push(TagDescriptor::link(
                Attrs::new()
                    .set("rel", "preload")
                    .set("href", format!("/{file}"))
                    .set("as", kind.as_value())
                    .flag("crossorigin"),
            ));
        }
    }

    log::debug!("{page_id}: built {} resource-hint tags", tags.len());
    tags
}
