//! Turns fetched catalog pages into owned data.
//!
//! Everything here is synchronous: pages are parsed, read, and dropped
//! within one call, so no parsed document ever lives across an await.

pub mod detail;
pub mod filter;
pub mod labels;
pub mod listing;
pub mod model;

#[cfg(test)]
mod tests;

pub use detail::extract_movie;
pub use filter::accept;
pub use labels::{Field, FieldLabels, LabelEntry, LabelsError};
pub use listing::extract_links;
pub use model::MovieMeta;
