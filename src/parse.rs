use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Raised when the raw text does not match the numeric-list grammar.
///
/// This is the only domain error: syntactically valid but mathematically
/// awkward inputs (zeros, negatives, a single element) are not rejected here.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("Please enter only numeric values separated by commas.")]
pub struct InvalidInputError;

// Grammar: NUMBER (,NUMBER)* with optional sign, optional decimal point,
// optional exponent; whitespace permitted around commas only.
static NUMBER_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?(?:\s*,\s*[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)*$",
    )
    .expect("grammar regex must compile")
});

/// Validate and tokenize a comma-separated list of numeric literals.
///
/// The regex is the sole gate: once the trimmed text matches, every token is
/// expected to parse as `f64`. A token-level failure is still folded into
/// [`InvalidInputError`] rather than panicking.
pub fn parse_input(raw: &str) -> Result<Vec<f64>, InvalidInputError> {
    let raw = raw.trim();
    if !NUMBER_LIST.is_match(raw) {
        return Err(InvalidInputError);
    }

    raw.split(',')
        .map(|token| token.trim().parse::<f64>().map_err(|_| InvalidInputError))
        .collect()
}
