use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

/// Prefix: a fixed alias, or 1 to 7 units where a unit is a letter or one
/// of the two-character series aliases. Number: the whole ASCII digit run.
///
/// `FC2-PPV 917114` reads as `PPV-917114`: the `fc2` alias only applies when
/// the number follows it directly.
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(t28|fc2|(?:3d|2d|s2|[a-z]){1,7}?)[-_ \t]?([0-9]{2,})").unwrap()
});

/// Upper bound on significant digits; longer runs are ids or timestamps,
/// not catalog numbers.
const MAX_SIGNIFICANT_DIGITS: usize = 7;

const PAD_WIDTHS: [usize; 3] = [3, 4, 5];

/// One code found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogCode {
    /// Series prefix, upper-cased.
    pub prefix: String,
    /// Digit run exactly as written, leading zeros included.
    pub number: String,
}

impl CatalogCode {
    /// The number with leading zeros removed (`"0"` for an all-zero run).
    pub fn significant_digits(&self) -> &str {
        let trimmed = self.number.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }

    pub fn numeric_value(&self) -> Result<u64, ParseIntError> {
        self.significant_digits().parse()
    }

    /// `PREFIX-NUMBER` with the number zero-padded to at least `width` digits.
    pub fn padded(&self, width: usize) -> String {
        format!("{}-{:0>width$}", self.prefix, self.significant_digits())
    }
}

impl fmt::Display for CatalogCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.number)
    }
}

/// Every non-overlapping code in `text`, in order of appearance.
pub fn extract_code_patterns(text: &str) -> Vec<CatalogCode> {
    CODE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let code = CatalogCode {
                prefix: caps[1].to_uppercase(),
                number: caps[2].to_string(),
            };
            (code.significant_digits().len() <= MAX_SIGNIFICANT_DIGITS).then_some(code)
        })
        .collect()
}

/// Search keywords for every code in `text`, one per padding width.
///
/// The catalog's own padding is unknown up front, so all plausible widths
/// are searched and mismatches are weeded out later by [`codes_equal`].
pub fn generate_variants(text: &str) -> HashSet<String> {
    extract_code_patterns(text)
        .iter()
        .flat_map(|code| PAD_WIDTHS.iter().map(move |&width| code.padded(width)))
        .collect()
}

/// Whether two raw strings name the same catalog entry.
///
/// Only the first code in each string is considered. Padding, separators and
/// case are ignored. Anything that fails to parse compares unequal.
pub fn codes_equal(lhs: &str, rhs: &str) -> bool {
    let (Some(lcode), Some(rcode)) = (first_code(lhs), first_code(rhs)) else {
        return false;
    };
    if lcode.prefix != rcode.prefix {
        return false;
    }

    let lnum = match lcode.numeric_value() {
        Ok(n) => n,
        Err(err) => {
            error!(code = %lcode, %err, "unparsable catalog number");
            return false;
        }
    };
    let rnum = match rcode.numeric_value() {
        Ok(n) => n,
        Err(err) => {
            error!(code = %rcode, %err, "unparsable catalog number");
            return false;
        }
    };
    lnum == rnum
}

fn first_code(text: &str) -> Option<CatalogCode> {
    extract_code_patterns(text).into_iter().next()
}
