//! Catalog code recognition and comparison.
//!
//! Catalog codes look like `SIRO-1715`: a short series prefix, an optional
//! separator, and a number whose zero-padding differs between sources. Query
//! text is parsed with [`extract_code_patterns`], which tolerates filenames
//! and free text; codes printed on catalog pages go through the stricter
//! [`parse_canonical_code`].

mod canonical;
mod pattern;

pub use canonical::parse_canonical_code;
pub use pattern::{CatalogCode, codes_equal, extract_code_patterns, generate_variants};
