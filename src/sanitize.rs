//! Text cleanup for report cells.
//!
//! Scanner metadata frequently carries list-to-string serialization
//! artifacts: a list of CWE labels arrives as `['CWE-79']` rather than
//! `CWE-79`. Cells are cleaned independently, so downstream spreadsheet
//! consumers see plain readable strings.

/// Characters left behind by list-like string serializations.
const STRAY_CHARS: &[char] = &['[', ']', '"', '\'', '`'];

/// Strip stray bracket/quote characters and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use semgrep_report::sanitize::clean_text;
///
/// assert_eq!(clean_text("['CWE-89']"), "CWE-89");
/// assert_eq!(clean_text("  plain text  "), "plain text");
/// ```
pub fn clean_text(value: &str) -> String {
    let cleaned: String = value.chars().filter(|c| !STRAY_CHARS.contains(c)).collect();
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_list_serialization() {
        assert_eq!(clean_text("['CWE-79']"), "CWE-79");
        assert_eq!(clean_text("[\"A01:2021\", \"A03:2021\"]"), "A01:2021, A03:2021");
    }

    #[test]
    fn test_strips_backticks() {
        assert_eq!(clean_text("`eval` call"), "eval call");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean_text("  padded  "), "padded");
        assert_eq!(clean_text("\ttabbed\n"), "tabbed");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(clean_text("SQL Injection"), "SQL Injection");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(clean_text("line one\nline two"), "line one\nline two");
    }
}
