//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the preload transform.
///
/// The transform never fails a build over merely-empty matches: missing
/// markers, unmatched entry names, and absent per-page keys all degrade to
/// empty contributions. Only inputs whose shape cannot be reasoned about at
/// all are rejected.
#[derive(Debug, Error)]
pub enum PreloadError {
    /// The page path does not live under the site root, so no canonical
    /// page identifier can be derived for per-page critical-asset lookups.
    #[error("page `{}` is outside the site root `{}`", .page.display(), .root.display())]
    PageOutsideRoot { page: PathBuf, root: PathBuf },
}
