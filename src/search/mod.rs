//! Query → keyword variants → concurrent searches → concurrent detail
//! fetches → accepted metadata on a channel.

pub mod group;
pub mod orchestrator;

pub use group::SearchGroup;
pub use orchestrator::Searcher;
