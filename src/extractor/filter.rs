use tracing::debug;

use crate::code::codes_equal;
use crate::extractor::model::MovieMeta;

/// Whether a candidate page really is the entry searched for.
///
/// The catalog search is fuzzy and returns neighbours and partial matches,
/// so only pages whose code equals the keyword are let through.
pub fn accept(keyword: &str, meta: &MovieMeta) -> bool {
    if codes_equal(keyword, &meta.code) {
        return true;
    }
    debug!(
        "Code mismatch: expected {}, got {} ({})",
        keyword, meta.code, meta.page
    );
    false
}
