//! Lexical helpers shared by the per-attribute rules.
//!
//! Source fields embed values in loose prose: a comma-carrying phrase inside
//! double quotes, a four-digit year somewhere in a date string, a number in
//! front of its unit. These helpers pull those pieces out and nothing more;
//! deciding what a missing piece means is the rules' job.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A double-quoted run, allowing `\\` and `\"` escapes inside.
static QUOTED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^\\"]|\\\\|\\")*""#).expect("valid quoted-run pattern"));

/// First run of four ASCII digits.
static YEAR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]{4}").expect("valid year pattern"));

/// Extract the first double-quoted run and remove its quote characters.
///
/// Escaped quotes and backslashes are allowed inside the run; the quote
/// characters themselves (outer and escaped) are dropped from the result.
/// Returns `None` when the text contains no complete quoted run.
///
/// # Examples
///
/// ```
/// use celldex_normalize::text::extract_quoted;
///
/// assert_eq!(
///     extract_quoted("\"OLED, 16M colors\" (main)"),
///     Some("OLED, 16M colors".to_string())
/// );
/// assert_eq!(extract_quoted("no quotes here"), None);
/// ```
pub fn extract_quoted(text: &str) -> Option<String> {
    QUOTED_RUN
        .find(text)
        .map(|run| run.as_str().replace('"', ""))
}

/// The first quoted run when one exists, otherwise the raw text.
pub fn quoted_or_raw(text: &str) -> Cow<'_, str> {
    match extract_quoted(text) {
        Some(inner) => Cow::Owned(inner),
        None => Cow::Borrowed(text),
    }
}

/// The first four-digit run, as the matched text.
pub fn first_year_run(text: &str) -> Option<&str> {
    YEAR_RUN.find(text).map(|run| run.as_str())
}

/// The first four-digit run parsed as an integer.
pub fn first_year(text: &str) -> Option<i32> {
    first_year_run(text).and_then(|run| run.parse().ok())
}

/// Parse the text before the first space as a number.
///
/// `"167 g (5.89 oz)"` yields `167.0`; an empty or non-numeric prefix
/// yields `None`.
pub fn leading_number(text: &str) -> Option<f64> {
    let prefix = text.split(' ').next().unwrap_or_default();
    if prefix.is_empty() {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_basic() {
        assert_eq!(
            extract_quoted("\"2022, February 09\""),
            Some("2022, February 09".to_string())
        );
        assert_eq!(extract_quoted("plain text"), None);
        assert_eq!(extract_quoted(""), None);
    }

    #[test]
    fn test_extract_quoted_takes_first_run() {
        assert_eq!(extract_quoted("\"a\" mid \"b\""), Some("a".to_string()));
    }

    #[test]
    fn test_extract_quoted_handles_escapes() {
        // Escaped quote chars are dropped along with the outer pair.
        assert_eq!(
            extract_quoted(r#""a \"b\" c""#),
            Some(r"a \b\ c".to_string())
        );
        assert_eq!(extract_quoted(r#""a \\ b""#), Some(r"a \\ b".to_string()));
    }

    #[test]
    fn test_extract_quoted_ignores_unclosed_quote() {
        assert_eq!(extract_quoted("dangling \"run"), None);
    }

    #[test]
    fn test_first_year() {
        assert_eq!(first_year("2022, February 09"), Some(2022));
        assert_eq!(first_year("Available. Released 2023"), Some(2023));
        assert_eq!(first_year("V30"), None);
        assert_eq!(first_year(""), None);
    }

    #[test]
    fn test_first_year_takes_first_four_digits() {
        assert_eq!(first_year("12345"), Some(1234));
        assert_eq!(first_year_run("about 1999 or 2001"), Some("1999"));
        assert_eq!(first_year_run("0042 widgets"), Some("0042"));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("167 g (5.89 oz)"), Some(167.0));
        assert_eq!(leading_number("5.8 inches"), Some(5.8));
        assert_eq!(leading_number("167"), Some(167.0));
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("about 167 g"), None);
        assert_eq!(leading_number(" 167 g"), None);
    }
}
