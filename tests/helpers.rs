#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_lookup::fetcher::{DocumentSource, FetchError, PageResponse};
use reqwest::StatusCode;
use url::Url;

/// A search result page linking to `links`.
pub fn search_page(links: &[&str]) -> String {
    let items: String = links
        .iter()
        .map(|href| {
            format!(
                r#"<li><div><p class="tmb"><a href="{href}"><span class="img"><img src="/pt.jpg"></span></a></p></div></li>"#
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>検索結果</title></head><body><ul id="list">{items}</ul></body></html>"#
    )
}

/// A detail page whose code cell reads `code_cell`.
pub fn detail_page(title: &str, code_cell: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>{title}</title></head>
<body>
<div class="area-headline"><h1>{title}</h1></div>
<div class="page-detail">
  <table>
    <tr>
      <td><div id="sample-video"><a href="/pl.jpg"><img src="/ps.jpg"></a></div></td>
      <td>
        <table>
          <tr><td>発売日：</td><td>2020-01-01</td></tr>
          <tr><td>収録時間：</td><td>120分</td></tr>
          <tr><td>出演者：</td><td><a href="/a/1">出演者A</a> <a href="/a/2">出演者B</a></td></tr>
          <tr><td>メーカー：</td><td><a href="/m/1">メーカーA</a></td></tr>
          <tr><td>ジャンル：</td><td><a href="/g/1">ジャンルA</a></td></tr>
          <tr><td>品番：</td><td>{code_cell}</td></tr>
        </table>
      </td>
    </tr>
  </table>
</div>
</body></html>"#
    )
}

/// In-memory catalog: search keywords map to detail paths, detail paths to
/// codes. Unknown detail paths answer 404.
#[derive(Default)]
pub struct CannedCatalog {
    results: HashMap<String, Vec<String>>,
    details: HashMap<String, String>,
    fetches: AtomicUsize,
}

pub const SEARCH_PREFIX: &str = "/search/=/searchstr=";

impl CannedCatalog {
    pub fn with_results(mut self, keyword: &str, paths: &[&str]) -> Self {
        self.results.insert(
            keyword.to_string(),
            paths.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    pub fn with_detail(mut self, path: &str, code_cell: &str) -> Self {
        self.details
            .insert(path.to_string(), detail_page(path, code_cell));
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for CannedCatalog {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let path = url.path();
        if let Some(keyword) = path.strip_prefix(SEARCH_PREFIX) {
            let links: Vec<&str> = self
                .results
                .get(keyword)
                .map(|paths| paths.iter().map(String::as_str).collect())
                .unwrap_or_default();
            return Ok(PageResponse::from_html(url.clone(), search_page(&links)));
        }

        match self.details.get(path) {
            Some(html) => Ok(PageResponse::from_html(url.clone(), html.clone())),
            None => Err(FetchError::Http {
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}
