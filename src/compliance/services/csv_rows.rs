//! Minimal reader for header-less two-column CSV text.
//!
//! Both the approved-dependency file and the license inventory tool speak the
//! same `package,license` format. Fields may be double-quoted; inside quotes a
//! doubled quote is a literal quote and commas are literal. Records never
//! span lines.

/// A row that could not be read as exactly two fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number
    pub line: usize,
    pub details: String,
}

/// Reads every non-empty line of `content` as a `(first, second)` pair
///
/// Lines that are completely empty are skipped. Fields are not trimmed.
pub fn read_pairs(content: &str) -> Result<Vec<(String, String)>, RowError> {
    let mut pairs = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            continue;
        }

        let mut fields = split_record(line).map_err(|details| RowError {
            line: index + 1,
            details,
        })?;

        if fields.len() != 2 {
            return Err(RowError {
                line: index + 1,
                details: format!("expected 2 fields, found {}", fields.len()),
            });
        }

        let second = fields.pop().unwrap_or_default();
        let first = fields.pop().unwrap_or_default();
        pairs.push((first, second));
    }

    Ok(pairs)
}

/// Splits one CSV record into its fields
fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                ',' => fields.push(std::mem::take(&mut field)),
                '"' if field.is_empty() => in_quotes = true,
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_plain_rows() {
        let pairs = read_pairs("requests,Apache 2.0\nurllib3,MIT\n").unwrap();
        assert_eq!(pairs, vec![pair("requests", "Apache 2.0"), pair("urllib3", "MIT")]);
    }

    #[test]
    fn test_quoted_fields_with_commas_and_quotes() {
        let pairs = read_pairs(r#""certifi","Mozilla Public License 2.0 (MPL 2.0)"
"odd","BSD, ""3-clause"""
"#)
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                pair("certifi", "Mozilla Public License 2.0 (MPL 2.0)"),
                pair("odd", r#"BSD, "3-clause""#),
            ]
        );
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let pairs = read_pairs("\na,MIT\n\n\nb,BSD").unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let pairs = read_pairs("a,MIT\r\nb,BSD\r\n").unwrap();
        assert_eq!(pairs, vec![pair("a", "MIT"), pair("b", "BSD")]);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let pairs = read_pairs("a, MIT\n").unwrap();
        assert_eq!(pairs, vec![pair("a", " MIT")]);
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let err = read_pairs("a,MIT\nb\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.details, "expected 2 fields, found 1");

        let err = read_pairs("a,MIT,extra\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.details, "expected 2 fields, found 3");
    }

    #[test]
    fn test_unterminated_quote() {
        let err = read_pairs("\"a,MIT\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.details.contains("unterminated"));
    }
}
