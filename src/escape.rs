//! String escaping and quoting helpers for embedding values into generated
//! text. Stateless transforms; no branch-engine involvement.

use std::fmt::Write;

/// Backslash-escape quotes, backslashes, and the four line terminator
/// characters that cannot appear raw inside a string literal.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for character in input.chars() {
        match character {
            '"' | '\'' | '\\' => {
                out.push('\\');
                out.push(character);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(character),
        }
    }
    out
}

/// Escape each value and join with commas.
pub fn escape_all<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| escape(value.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Double-quote each value verbatim and join with commas.
pub fn quote_all<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (position, value) in values.into_iter().enumerate() {
        if position > 0 {
            out.push(',');
        }
        // Infallible for String targets.
        let _ = write!(out, "\"{}\"", value.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_and_backslash() {
        assert_eq!(escape(r#"say "hi" to 'them'"#), r#"say \"hi\" to \'them\'"#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escape_line_terminators() {
        assert_eq!(escape("a\nb\rc"), "a\\nb\\rc");
        assert_eq!(escape("a\u{2028}b\u{2029}c"), "a\\u2028b\\u2029c");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_escape_all_joins_with_commas() {
        assert_eq!(escape_all(["a\"b", "c"]), "a\\\"b,c");
    }

    #[test]
    fn test_quote_all() {
        assert_eq!(quote_all(["a", "b"]), "\"a\",\"b\"");
        assert_eq!(quote_all::<_, &str>([]), "");
    }
}
