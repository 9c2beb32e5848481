use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// A type-erased parser.
///
/// Combinator structs hold their children inline; boxing is needed only
/// where a grammar's type would otherwise have to contain itself — the
/// recursion points, paired with [`lazy`](crate::lazy::lazy).
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add `.boxed()` method support for parsers.
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: 'code,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chr::is_char;
    use crate::cursor::StrCursor;
    use crate::map::MapExt;
    use crate::or::OrExt;

    #[test]
    fn test_boxed_parser_parses() {
        let parser: BoxedParser<char> = is_char('a').boxed();
        let cursor = StrCursor::new("ab");

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'a');
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_boxed_erases_branch_types() {
        // Both branches have different concrete types; boxing unifies.
        let branches: Vec<BoxedParser<u32>> = vec![
            is_char('a').map(|_| 1u32).boxed(),
            is_char('b').or(is_char('c')).map(|_| 2u32).boxed(),
        ];

        let (one, _) = branches[0].parse(StrCursor::new("a")).unwrap();
        let (two, _) = branches[1].parse(StrCursor::new("c")).unwrap();
        assert_eq!((one, two), (1, 2));
    }

    #[test]
    fn test_boxed_failure_passes_through() {
        let parser: BoxedParser<char> = is_char('a').boxed();
        let err = parser.parse(StrCursor::new("z")).unwrap_err();
        assert_eq!(err.offset(), 0);
    }
}
