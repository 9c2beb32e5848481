use std::marker::PhantomData;

use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// A parser that defers construction of the actual parser until parse
/// time. Recursive grammars reference themselves through `lazy` so that
/// building the grammar terminates; each recursive descent then builds
/// one more level on demand.
pub struct Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    factory: F,
    _phantom: PhantomData<&'code ()>,
}

impl<'code, F, P> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function.
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::chr::is_char;
    use crate::cursor::StrCursor;
    use crate::map::MapExt;
    use crate::or::OrExt;

    #[test]
    fn test_lazy_defers_construction() {
        let parser = lazy(|| is_char('x'));
        let cursor = StrCursor::new("xy");

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'x');
        assert_eq!(cursor.peek(), Some('y'));
    }

    // Depth of a nest of parentheses: the canonical self-referencing
    // grammar that lazy exists for.
    fn nesting<'code>() -> BoxedParser<'code, u32> {
        between(is_char('('), lazy(nesting), is_char(')'))
            .map(|depth| depth + 1)
            .or(is_char('.').map(|_| 0))
            .boxed()
    }

    #[test]
    fn test_recursive_grammar() {
        let cursor = StrCursor::new("(((.)))");
        let (depth, cursor) = nesting().parse(cursor).unwrap();

        assert_eq!(depth, 3);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_recursive_grammar_failure() {
        let cursor = StrCursor::new("((.)");
        assert!(nesting().parse(cursor).is_err());
    }
}
