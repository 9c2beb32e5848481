use regex::Regex;

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a regular expression anchored at the cursor.
///
/// The match must begin exactly at the current position; the pattern is
/// free to be unanchored elsewhere. Yields the matched slice of the
/// input. On a mismatch it fails uncommitted with an empty message.
pub struct Re {
    regex: Regex,
}

impl Re {
    /// Compile `pattern`, anchored to the cursor position.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Grammar
    /// literals are programmer-supplied; an invalid one is a bug in the
    /// grammar, not a parse failure.
    pub fn new(pattern: &str) -> Self {
        let anchored = format!(r"\A(?:{pattern})");
        match Regex::new(&anchored) {
            Ok(regex) => Re { regex },
            Err(err) => panic!("invalid regex pattern {pattern:?}: {err}"),
        }
    }

    /// Wrap a pre-compiled regex. The caller is responsible for anchoring
    /// (`\A`); an unanchored match that starts past the cursor is treated
    /// as a mismatch. Intended for regexes shared through
    /// `once_cell::sync::Lazy` statics, since `Regex` clones are cheap.
    pub fn from_regex(regex: Regex) -> Self {
        Re { regex }
    }
}

impl<'code> Parser<'code> for Re {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.regex.find(cursor.rest()) {
            Some(m) if m.start() == 0 => {
                let matched = &cursor.rest()[..m.end()];
                Ok((matched, cursor.advance(m.end())))
            }
            _ => Err(ParseError::bare(cursor.loc())),
        }
    }
}

/// Convenience function to create an anchored regex parser.
///
/// # Panics
///
/// Panics if `pattern` is invalid; see [`Re::new`].
pub fn re(pattern: &str) -> Re {
    Re::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;

    #[test]
    fn test_match_at_cursor() {
        let cursor = StrCursor::new("abc123");
        let (matched, cursor) = re("[a-z]+").parse(cursor).unwrap();

        assert_eq!(matched, "abc");
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn test_anchored_to_cursor_not_to_input_start() {
        let cursor = StrCursor::new("abc123").advance(3);
        let (matched, cursor) = re("[0-9]+").parse(cursor).unwrap();

        assert_eq!(matched, "123");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_match_later_in_input_is_a_mismatch() {
        // "[0-9]+" would match at offset 3, but not at the cursor.
        let cursor = StrCursor::new("abc123");
        let err = re("[0-9]+").parse(cursor).unwrap_err();

        assert_eq!(err.message(), "");
        assert!(!err.is_committed());
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_zero_width_match_succeeds() {
        let cursor = StrCursor::new("xyz");
        let (matched, cursor) = re("[0-9]*").parse(cursor).unwrap();

        assert_eq!(matched, "");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_alternation_in_pattern_stays_anchored() {
        // Without the (?:…) wrapping, the \A anchor would bind to the
        // first alternative only.
        let cursor = StrCursor::new("world");
        let (matched, _) = re("hello|world").parse(cursor).unwrap();
        assert_eq!(matched, "world");
    }

    #[test]
    fn test_from_regex() {
        let regex = Regex::new(r"\A[a-z]+").unwrap();
        let cursor = StrCursor::new("abc!");
        let (matched, _) = Re::from_regex(regex).parse(cursor).unwrap();
        assert_eq!(matched, "abc");
    }

    #[test]
    #[should_panic(expected = "invalid regex pattern")]
    fn test_invalid_pattern_panics() {
        re("(unclosed");
    }
}
