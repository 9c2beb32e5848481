use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for ordered choice.
///
/// Runs the first parser; on success, done. On an *uncommitted* failure
/// the second parser runs from the original position and its outcome is
/// returned verbatim. A *committed* failure is returned unchanged — the
/// first branch had already consumed input inside a sequence, so the
/// grammar reports the failure where the investment happened instead of
/// collapsing to a vague no-alternative-matched.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.first.parse(cursor) {
            Ok(ok) => Ok(ok),
            Err(err) if err.is_committed() => Err(err),
            Err(_) => self.second.parse(cursor),
        }
    }
}

/// Convenience function to create an Or parser.
pub fn or<'code, P1, P2>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    Or::new(first, second)
}

/// Extension trait to add `.or()` method support for parsers.
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::attempt::attempt;
    use crate::chr::is_char;
    use crate::cursor::StrCursor;
    use crate::lit::lit;
    use crate::map::MapExt;

    #[test]
    fn test_first_succeeds() {
        let cursor = StrCursor::new("a");
        let (c, _) = is_char('a').or(is_char('b')).parse(cursor).unwrap();
        assert_eq!(c, 'a');
    }

    #[test]
    fn test_uncommitted_failure_falls_back() {
        let cursor = StrCursor::new("b");
        let (c, _) = is_char('a').or(is_char('b')).parse(cursor).unwrap();
        assert_eq!(c, 'b');
    }

    #[test]
    fn test_fallback_restarts_from_original_position() {
        let cursor = StrCursor::new("world");
        let (matched, cursor) = lit("hello").or(lit("world")).parse(cursor).unwrap();

        assert_eq!(matched, "world");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_both_fail_returns_second_outcome() {
        let cursor = StrCursor::new("z");
        let err = is_char('a').or(is_char('b')).parse(cursor).unwrap_err();

        // The second branch's failure, verbatim.
        assert_eq!(err.offset(), 0);
        assert!(!err.is_committed());
    }

    #[test]
    fn test_committed_failure_disables_fallback() {
        // "ab" consumed 'a' before failing, so the alternative must not
        // try the second branch even though it would match.
        let cursor = StrCursor::new("ax");
        let first = is_char('a').and(is_char('b')).map(|_| "first");
        let second = lit("ax").map(|_| "second");

        let err = first.or(second).parse(cursor).unwrap_err();
        assert!(err.is_committed());
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_attempt_restores_fallback() {
        let cursor = StrCursor::new("ax");
        let first = is_char('a').and(is_char('b')).map(|_| "first");
        let second = lit("ax").map(|_| "second");

        let (value, _) = attempt(first).or(second).parse(cursor).unwrap();
        assert_eq!(value, "second");
    }

    #[test]
    fn test_method_chain() {
        let cursor = StrCursor::new("c");
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));

        let (c, _) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'c');
    }

    #[test]
    fn test_function_syntax() {
        let cursor = StrCursor::new("b");
        let (c, _) = or(is_char('a'), is_char('b')).parse(cursor).unwrap();
        assert_eq!(c, 'b');
    }
}
