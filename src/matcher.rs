//! Entry-name matching against hashed build output names.

/// Check whether a build output file belongs to a logical entry.
///
/// Output names usually carry a content hash (`assets/main-ab12cd.js` for
/// entry `main`); unhashed outputs are plain `main.js`. Matching is on the
/// base name only and requires the `-` or `.` delimiter right after the
/// entry name, so entry `main` never matches `mainframe-ab12cd.js`.
/// Case-sensitive, no wildcards.
pub fn matches_entry(file_name: &str, entry_name: &str) -> bool {
    let base = file_name.rsplit('/').next().unwrap_or_default();
    let Some(rest) = base.strip_prefix(entry_name) else {
        return false;
    };
    rest.starts_with('-') || rest.starts_with('.')
}
