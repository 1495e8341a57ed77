use std::fs;
use url::Url;

use crate::extractor::{FieldLabels, accept, extract_links, extract_movie};
use crate::fetcher::types::PageResponse;

#[test]
fn test_extract_detail_page() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/detail.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(
        html,
        "https://www.example.jp/digital/videoa/-/detail/=/cid=siro01715/",
    );
    let meta = extract_movie(&response, &FieldLabels::default());

    assert_eq!(meta.page, response.url_final);
    assert_eq!(meta.title, "素人ガチナンパ 1715");
    assert_eq!(
        meta.thumbnail_image.as_deref(),
        Some("https://pics.example.jp/digital/video/siro01715/siro01715ps.jpg")
    );
    // relative cover link is resolved against the page
    assert_eq!(
        meta.cover_image.as_deref(),
        Some("https://www.example.jp/digital/video/siro01715/siro01715pl.jpg")
    );
    assert_eq!(meta.release_date.as_deref(), Some("2015/03/07"));
    assert_eq!(meta.movie_length.as_deref(), Some("65分"));
    assert_eq!(meta.actresses, vec!["あやか", "みう"]);
    assert!(meta.directors.is_empty());
    assert_eq!(meta.series.as_deref(), Some("素人ガチナンパ"));
    assert_eq!(meta.maker.as_deref(), Some("SIRO"));
    assert_eq!(meta.label.as_deref(), Some("素人"));
    assert_eq!(meta.genres, vec!["素人", "ナンパ", "ハイビジョン"]);
    assert_eq!(meta.code, "SIRO-01715");

    assert!(accept("SIRO-1715", &meta));
    assert!(!accept("SIRO-1716", &meta));
}

#[test]
fn test_extract_placeholder_values() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/placeholder.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://www.example.jp/detail/=/cid=3dsvr00200/");
    let meta = extract_movie(&response, &FieldLabels::default());

    assert_eq!(meta.title, "3D VR 200");
    assert_eq!(meta.release_date, None);
    assert_eq!(meta.movie_length, None);
    assert!(meta.actresses.is_empty());
    assert_eq!(
        meta.thumbnail_image.as_deref(),
        Some("https://www.example.jp/pics/3dsvr00200ps.jpg")
    );
    assert_eq!(meta.cover_image, meta.thumbnail_image);
    assert_eq!(meta.code, "3DSVR-00200");
    assert!(accept("3DSVR-200", &meta));
}

#[test]
fn test_extract_with_custom_labels() {
    let html = r#"<div class="page-detail"><table><tr><td><table>
        <tr><td>Release:</td><td>2020-01-01</td></tr>
        <tr><td>Cast:</td><td><a>One</a><a>Two</a></td></tr>
        <tr><td>発売日：</td><td>1999-09-09</td></tr>
        <tr><td>ID:</td><td>abp123</td></tr>
    </table></td></tr></table></div>"#;
    let labels = FieldLabels::from_json(
        r#"[
            {"label": "Release", "field": "release_date"},
            {"label": "Cast", "field": "actresses"},
            {"label": "ID", "field": "code"}
        ]"#,
    )
    .unwrap();

    let response = create_test_response(html.to_string(), "https://example.com/item/1");
    let meta = extract_movie(&response, &labels);

    assert_eq!(meta.release_date.as_deref(), Some("2020-01-01"));
    assert_eq!(meta.actresses, vec!["One", "Two"]);
    assert_eq!(meta.code, "ABP-123");
}

#[test]
fn test_extract_search_links() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/search.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(
        html,
        "https://www.example.jp/search/=/searchstr=SIRO-1715",
    );
    let links = extract_links(&response);

    assert_eq!(
        links,
        vec![
            Url::parse("https://www.example.jp/digital/videoa/-/detail/=/cid=siro01715/").unwrap(),
            Url::parse("https://www.example.jp/mono/dvd/-/detail/=/cid=siro1715dod/").unwrap(),
        ]
    );
}

#[test]
fn test_empty_and_malformed_pages() {
    let response = create_test_response(
        "<html><head><title>Broken</title><body><ul id=\"list\"><li><div>".to_string(),
        "https://example.com/broken",
    );

    assert!(extract_links(&response).is_empty());
    let meta = extract_movie(&response, &FieldLabels::default());
    assert_eq!(meta.title, "");
    assert_eq!(meta.code, "");
    assert!(!accept("SIRO-1715", &meta));
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse::from_html(Url::parse(url).unwrap(), html)
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/[a-z]*",
        ) {
            let response = create_test_response(html, &url);
            let _ = extract_links(&response);
            let meta = extract_movie(&response, &FieldLabels::default());
            prop_assert_eq!(meta.page.as_str(), response.url_final.as_str());
        }
    }
}
