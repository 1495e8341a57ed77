use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::code::parse_canonical_code;
use crate::extractor::labels::{Field, FieldLabels};
use crate::extractor::model::{MovieMeta, non_empty, normalize_whitespace};
use crate::fetcher::PageResponse;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".area-headline h1").unwrap());
static THUMBNAIL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#sample-video img").unwrap());
static COVER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#sample-video a").unwrap());
static INFO_ROW: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.page-detail > table > tbody > tr > td > table > tbody > tr").unwrap()
});
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

static PLACEHOLDER_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+$").unwrap());

/// Read a detail page into a [`MovieMeta`]. Acceptance is decided elsewhere.
pub fn extract_movie(page: &PageResponse, labels: &FieldLabels) -> MovieMeta {
    let document = Html::parse_document(&page.body_utf8);
    let base = &page.url_final;
    let mut meta = MovieMeta::new(base.clone());

    meta.title = document
        .select(&TITLE)
        .next()
        .map(|h1| text_of(&h1))
        .unwrap_or_default();

    meta.thumbnail_image = document
        .select(&THUMBNAIL)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| resolve(base, src));

    let cover = document
        .select(&COVER)
        .next()
        .and_then(|a| a.value().attr("href"))
        .filter(|href| !is_pseudo_link(href));
    meta.cover_image = match cover {
        Some(href) => Some(resolve(base, href)),
        None => meta.thumbnail_image.clone(),
    };

    for row in document.select(&INFO_ROW) {
        let Some(key) = row.select(&CELL).next() else {
            continue;
        };
        let Some(field) = labels.lookup(&text_of(&key)) else {
            continue;
        };
        let Some(value) = next_element(&key) else {
            continue;
        };
        fill(&mut meta, field, &value);
    }

    meta
}

fn fill(meta: &mut MovieMeta, field: Field, value: &ElementRef<'_>) {
    match field {
        Field::ReleaseDate => {
            let date = text_of(value);
            meta.release_date = (!date.is_empty() && !PLACEHOLDER_DATE.is_match(&date)).then_some(date);
        }
        Field::MovieLength => meta.movie_length = non_empty(&raw_text(value)),
        Field::Actresses => meta.actresses = anchor_texts(value),
        Field::Directors => meta.directors = anchor_texts(value),
        Field::Series => meta.series = non_empty(&raw_text(value)),
        Field::Maker => meta.maker = non_empty(&raw_text(value)),
        Field::Label => meta.label = non_empty(&raw_text(value)),
        Field::Genres => meta.genres = anchor_texts(value),
        Field::Code => meta.code = parse_canonical_code(&text_of(value)),
    }
}

fn raw_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

fn text_of(element: &ElementRef<'_>) -> String {
    normalize_whitespace(&raw_text(element))
}

fn anchor_texts(cell: &ElementRef<'_>) -> Vec<String> {
    cell.select(&ANCHOR)
        .filter_map(|a| non_empty(&raw_text(&a)))
        .collect()
}

fn next_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn is_pseudo_link(href: &str) -> bool {
    href.trim_start()
        .get(..10)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript"))
}

fn resolve(base: &Url, link: &str) -> String {
    base.join(link.trim())
        .map(|url| url.to_string())
        .unwrap_or_else(|_| link.to_string())
}
