use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::fetcher::PageResponse;

static RESULT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#list > li > div > p.tmb > a").unwrap());

/// Detail page links on a search result page, in document order.
pub fn extract_links(page: &PageResponse) -> Vec<Url> {
    let document = Html::parse_document(&page.body_utf8);

    document
        .select(&RESULT_LINK)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| match page.url_final.join(href.trim()) {
            Ok(url) => Some(url),
            Err(err) => {
                debug!(href, %err, "skipping unresolvable result link");
                None
            }
        })
        .collect()
}
