//! Locale-independent money amounts.

use super::{ParseError, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

const CURRENCY_SYMBOLS: [char; 4] = ['€', '$', '£', '¥'];
const CURRENCY_CODES: [&str; 3] = ["EUR", "USD", "GBP"];
const GROUP_SEPARATORS: [char; 4] = [',', ' ', '\u{00A0}', '\u{202F}'];

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("Valid decimal regex"));

fn strip_currency(mut amount: &str) -> &str {
    loop {
        let before = amount;
        amount = amount.trim();
        amount = amount.trim_start_matches(CURRENCY_SYMBOLS);
        amount = amount.trim_end_matches(CURRENCY_SYMBOLS);
        for code in CURRENCY_CODES {
            amount = amount.strip_prefix(code).unwrap_or(amount);
            amount = amount.strip_suffix(code).unwrap_or(amount);
        }
        if amount == before {
            return amount;
        }
    }
}

/// Parses a decimal amount written by a model.
///
/// A currency symbol (`€ $ £ ¥`) or code (`EUR USD GBP`) may precede or follow
/// the number. Thousands separators (`,`, spaces, non-breaking spaces) are
/// removed and `.` is the decimal separator. The sign is kept; rejecting
/// negative budget lines is the caller's business.
///
/// # Errors
///
/// Returns [`ParseError`] if what remains is not a plain decimal number.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::parse_amount;
///
/// assert_eq!(parse_amount("€10000").unwrap(), 10000.0);
/// assert_eq!(parse_amount("€5,000").unwrap(), 5000.0);
/// assert_eq!(parse_amount("12 500.50 EUR").unwrap(), 12500.5);
/// assert_eq!(parse_amount("-$3").unwrap(), -3.0);
/// assert!(parse_amount("a lot").is_err());
/// ```
pub fn parse_amount(raw: &str) -> ParseResult<f64> {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix(['-', '+']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    let digits: String = strip_currency(unsigned)
        .chars()
        .filter(|c| !GROUP_SEPARATORS.contains(c))
        .collect();
    let number = format!("{}{}", sign, digits);

    if !DECIMAL.is_match(&number) {
        return Err(ParseError::new(format!("'{}' is not an amount", raw)));
    }
    number
        .parse::<f64>()
        .map_err(|e| ParseError::new(format!("'{}' is not an amount: {}", raw, e)))
}
