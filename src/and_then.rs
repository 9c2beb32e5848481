use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for monadic continuation: the second parser is
/// built from the first parser's value.
///
/// Commit propagation mirrors sequencing: once the first parser has
/// consumed input, entering the continuation is a commitment, and any
/// failure out of the continuation is marked committed. When the first
/// parser consumed nothing the continuation's own flag stands, so an
/// `attempt`-wrapped zero-width prefix still permits fallback.
pub struct AndThen<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        AndThen { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, mid) = self.parser.parse(cursor)?;
        match (self.binder)(value).parse(mid) {
            Ok(ok) => Ok(ok),
            Err(err) if mid.offset() > cursor.offset() => Err(err.committed()),
            Err(err) => Err(err),
        }
    }
}

/// Convenience function to create an AndThen parser.
pub fn and_then<'code, P, F, Q>(parser: P, binder: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    AndThen::new(parser, binder)
}

/// Extension trait to add `.and_then()` method support for parsers.
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, binder: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, binder)
    }
}

impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
