use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Metadata for one catalog entry, as read from its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMeta {
    pub page: Url,
    pub title: String,
    pub thumbnail_image: Option<String>,
    pub cover_image: Option<String>,
    pub release_date: Option<String>,
    pub movie_length: Option<String>,
    pub actresses: Vec<String>,
    pub directors: Vec<String>,
    pub genres: Vec<String>,
    pub series: Option<String>,
    pub maker: Option<String>,
    pub label: Option<String>,
    pub code: String,
}

impl MovieMeta {
    /// An entry with only its page known; the extractor fills in the rest.
    pub fn new(page: Url) -> Self {
        Self {
            page,
            title: String::new(),
            thumbnail_image: None,
            cover_image: None,
            release_date: None,
            movie_length: None,
            actresses: Vec::new(),
            directors: Vec::new(),
            genres: Vec::new(),
            series: None,
            maker: None,
            label: None,
            code: String::new(),
        }
    }
}

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run (newlines included) into one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

/// `None` for text that is empty once normalized.
pub fn non_empty(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);
    (!text.is_empty()).then_some(text)
}
