use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use url::{Url, form_urlencoded};

use crate::code::generate_variants;
use crate::extractor::{FieldLabels, MovieMeta, accept, extract_links, extract_movie};
use crate::fetcher::DocumentSource;
use crate::search::group::SearchGroup;

/// The search endpoint chokes on anything before the series letters.
static SEARCHABLE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z].*").unwrap());

const SEARCH_PATH: &str = "search/=/searchstr=";

/// Resolves catalog-code queries against the catalog.
///
/// Cheap to clone; clones share the document source and label table.
pub struct Searcher<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    source: S,
    base_url: Url,
    labels: FieldLabels,
}

impl<S> Clone for Searcher<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: DocumentSource> Searcher<S> {
    pub fn new(source: S, base_url: Url, labels: FieldLabels) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                base_url,
                labels,
            }),
        }
    }

    /// Start resolving `query` and return immediately.
    ///
    /// One task per keyword variant is spawned on `group`, and each of those
    /// spawns one task per result link. Accepted metadata is sent on
    /// `output`; the caller must keep draining it while the group runs.
    /// The group is never closed here, and the caller's own senders keep the
    /// channel open.
    pub fn search(&self, query: &str, group: &SearchGroup, output: mpsc::Sender<MovieMeta>) {
        let keywords = generate_variants(query);
        info!(query, keywords = keywords.len(), "Starting search");

        for keyword in keywords {
            let inner = self.inner.clone();
            let group_handle = group.clone();
            let output = output.clone();
            group.spawn(async move {
                inner.search_keyword(keyword, group_handle, output).await;
            });
        }
    }

    /// Run a whole query and gather the accepted results.
    ///
    /// Several keyword variants usually lead to the same detail page, so
    /// results are deduplicated by page, first one wins.
    pub async fn collect(&self, query: &str, buffer: usize) -> Vec<MovieMeta> {
        let group = SearchGroup::new();
        let (tx, mut rx) = mpsc::channel(buffer.max(1));
        self.search(query, &group, tx);
        group.close();

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        while let Some(meta) = rx.recv().await {
            if seen.insert(meta.page.clone()) {
                results.push(meta);
            }
        }
        group.wait().await;

        info!(
            query,
            results = results.len(),
            tasks = group.completed(),
            "Search finished"
        );
        results
    }

    /// The catalog search URL for one keyword.
    pub fn search_url(&self, keyword: &str) -> Option<Url> {
        self.inner.search_url(keyword)
    }
}

impl<S: DocumentSource> Inner<S> {
    fn search_url(&self, keyword: &str) -> Option<Url> {
        let searchable = SEARCHABLE_KEYWORD.find(keyword)?.as_str();
        let escaped: String = form_urlencoded::byte_serialize(searchable.as_bytes()).collect();
        let raw = format!(
            "{}/{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            SEARCH_PATH,
            escaped
        );
        match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(keyword, %err, "Cannot build search url");
                None
            }
        }
    }

    #[instrument(skip_all, fields(keyword = %keyword))]
    async fn search_keyword(
        self: Arc<Self>,
        keyword: String,
        group: SearchGroup,
        output: mpsc::Sender<MovieMeta>,
    ) {
        let Some(url) = self.search_url(&keyword) else {
            debug!("Nothing searchable in keyword");
            return;
        };
        debug!("Search page: {}", url);

        let page = match self.source.fetch(&url).await {
            Ok(page) => page,
            Err(err) => {
                debug!(remote = err.is_remote(), "Error fetching {}: {}", url, err);
                return;
            }
        };

        let links = extract_links(&page);
        debug!("{} result links on {}", links.len(), url);

        for link in links {
            let inner = self.clone();
            let keyword = keyword.clone();
            let output = output.clone();
            group.spawn(async move {
                inner.fetch_detail(link, keyword, output).await;
            });
        }
    }

    #[instrument(skip_all, fields(keyword = %keyword, url = %url))]
    async fn fetch_detail(
        self: Arc<Self>,
        url: Url,
        keyword: String,
        output: mpsc::Sender<MovieMeta>,
    ) {
        debug!("Product page: {}", url);

        let page = match self.source.fetch(&url).await {
            Ok(page) => page,
            Err(err) => {
                debug!(remote = err.is_remote(), "Error fetching {}: {}", url, err);
                return;
            }
        };

        let meta = extract_movie(&page, &self.labels);
        if !accept(&keyword, &meta) {
            return;
        }

        info!(code = %meta.code, "Found {}", meta.page);
        if output.send(meta).await.is_err() {
            debug!("Output receiver dropped, discarding result");
        }
    }
}
