#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use catalog_lookup::code::{codes_equal, generate_variants, parse_canonical_code};
use catalog_lookup::extractor::{FieldLabels, extract_links, extract_movie};
use catalog_lookup::fetcher::PageResponse;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data).to_string();

    let response = PageResponse::from_html(Url::parse("https://example.com/detail/").unwrap(), html.clone());

    // Neither the extractors nor the code parsers may panic on any input
    let _ = extract_links(&response);
    let meta = extract_movie(&response, &FieldLabels::default());
    let _ = codes_equal(&html, &meta.code);
    let _ = generate_variants(&html);
    let _ = parse_canonical_code(&html);
});
