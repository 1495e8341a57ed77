//! Resolve catalog codes found in free text (usually filenames) to movie
//! metadata scraped from an online catalog.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use catalog_lookup::{config::Config, fetcher::HttpFetcher, search::Searcher};
//!
//! let config = Config::from_env()?;
//! let searcher = Searcher::new(
//!     HttpFetcher::new(&config)?,
//!     config.base_url().clone(),
//!     config.load_labels()?,
//! );
//! for meta in searcher.collect("SIRO-1715.mp4", config.output_buffer()).await {
//!     println!("{} {}", meta.code, meta.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod code;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod search;

pub use extractor::MovieMeta;
