use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches an exact literal string.
///
/// Yields the matched slice of the input. On a mismatch it fails
/// uncommitted with an empty message; the combinators above it decide
/// what the expectation should be called.
pub struct Lit {
    expected: &'static str,
}

impl Lit {
    pub fn new(expected: &'static str) -> Self {
        Lit { expected }
    }
}

impl<'code> Parser<'code> for Lit {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        if rest.starts_with(self.expected) {
            let matched = &rest[..self.expected.len()];
            Ok((matched, cursor.advance(self.expected.len())))
        } else {
            Err(ParseError::bare(cursor.loc()))
        }
    }
}

/// Convenience function to create a literal parser.
pub fn lit(expected: &'static str) -> Lit {
    Lit::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;

    #[test]
    fn test_exact_match() {
        let cursor = StrCursor::new("null");
        let (matched, cursor) = lit("null").parse(cursor).unwrap();

        assert_eq!(matched, "null");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_prefix_match_leaves_rest() {
        let cursor = StrCursor::new("true,");
        let (matched, cursor) = lit("true").parse(cursor).unwrap();

        assert_eq!(matched, "true");
        assert_eq!(cursor.peek(), Some(','));
    }

    #[test]
    fn test_mismatch_is_bare_and_uncommitted() {
        let cursor = StrCursor::new("nul!");
        let err = lit("null").parse(cursor).unwrap_err();

        assert_eq!(err.message(), "");
        assert!(!err.is_committed());
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_mismatch_consumes_nothing() {
        let cursor = StrCursor::new("falsx");
        assert!(lit("false").parse(cursor).is_err());
        // The original cursor is untouched; a fallback can reuse it.
        assert_eq!(cursor.peek(), Some('f'));
    }

    #[test]
    fn test_insufficient_input_fails() {
        let cursor = StrCursor::new("tr");
        assert!(lit("true").parse(cursor).is_err());
    }

    #[test]
    fn test_empty_literal_always_matches() {
        let cursor = StrCursor::new("xyz");
        let (matched, cursor) = lit("").parse(cursor).unwrap();

        assert_eq!(matched, "");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        let cursor = StrCursor::new("True");
        assert!(lit("true").parse(cursor).is_err());
    }
}
