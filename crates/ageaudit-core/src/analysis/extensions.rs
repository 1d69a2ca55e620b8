//! File-extension extraction for histogram grouping.

use std::collections::BTreeSet;
use std::path::Path;

use compact_str::{format_compact, CompactString};

use crate::model::FileRecord;

/// Extension of `path` including the leading dot, or `""` when the file has
/// none. Case is preserved — matching against extensions is the consumer's
/// job and is case-insensitive there.
pub fn extension_of(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) => format_compact!(".{}", ext.to_string_lossy()),
        None => CompactString::new(""),
    }
}

/// Deduplicated set of extensions across a record set.
///
/// Ordered so downstream output is deterministic; the order itself carries
/// no meaning.
pub fn extensions_of(records: &[FileRecord]) -> BTreeSet<CompactString> {
    records.iter().map(|r| extension_of(&r.path)).collect()
}
