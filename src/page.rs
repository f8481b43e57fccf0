//! Canonical page identifiers.

use std::fmt;
use std::path::Path;

use crate::error::PreloadError;

/// Site-root-absolute identifier for the page being transformed, e.g.
/// `/blog/index.html`.
///
/// Always `/`-separated regardless of platform, always with a leading `/`.
/// This is the only key used for per-page critical-asset lookups, so it
/// must come out identical for the same physical page across repeated
/// invocations and across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap an already-canonical identifier verbatim (`/`-separated, leading
/// `/`). Hosts deriving from a filesystem path use [`canonical_page_id`].
impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Derive the canonical [`PageId`] for a page from its output path and the
/// site root.
///
/// Separator normalization happens through [`Path::components`], so the
/// same page yields the same identifier on every platform. A page outside
/// the site root has no derivable identifier and is rejected.
pub fn canonical_page_id(page_path: &Path, site_root: &Path) -> Result<PageId, PreloadError> {
    let rel = page_path
        .strip_prefix(site_root)
        .map_err(|_| PreloadError::PageOutsideRoot {
            page: page_path.to_path_buf(),
            root: site_root.to_path_buf(),
        })?;

    let mut id = String::with_capacity(rel.as_os_str().len() + 1);
    for component in rel.components() {
        id.push('/');
        id.push_str(&component.as_os_str().to_string_lossy());
    }
    if id.is_empty() {
        id.push('/');
    }
    Ok(PageId(id))
}
