use std::sync::LazyLock;

use regex::Regex;

static PAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(fc2|(?:3d|2d|[a-z])+)-?([0-9]+)").unwrap());

/// Normalize a code as printed on a catalog page (`siro01715`,
/// `118abp00123`, `3dsvr00200`) to `PREFIX-NUMBER`.
///
/// Digits in front of the series are a label id and are dropped. Text with
/// no recognizable code is returned unchanged.
pub fn parse_canonical_code(text: &str) -> String {
    match PAGE_CODE_REGEX.captures(text) {
        Some(caps) => format!("{}-{}", caps[1].to_uppercase(), &caps[2]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_canonical() {
        assert_eq!(parse_canonical_code("SIRO-1715"), "SIRO-1715");
    }

    #[test]
    fn test_page_codes() {
        assert_eq!(parse_canonical_code("siro01715"), "SIRO-01715");
        assert_eq!(parse_canonical_code("118abp00123"), "ABP-00123");
        assert_eq!(parse_canonical_code("h_1234siro00123"), "SIRO-00123");
        assert_eq!(parse_canonical_code("3dsvr00200"), "3DSVR-00200");
        assert_eq!(parse_canonical_code("fc2917114"), "FC2-917114");
    }

    #[test]
    fn test_unmatched_returns_input() {
        assert_eq!(parse_canonical_code("----"), "----");
        assert_eq!(parse_canonical_code("品番なし"), "品番なし");
        assert_eq!(parse_canonical_code(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(parse_canonical_code("siro１７１５"), "siro１７１５");
        assert_eq!(parse_canonical_code("abc١٢٣"), "abc١٢٣");
    }
}
