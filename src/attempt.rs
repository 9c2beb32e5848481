use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that demotes a committed failure to uncommitted.
///
/// Successes and uncommitted failures pass through untouched. This is
/// the only construct that clears the commit flag; wrapping a branch in
/// `attempt` is how a grammar asks for unbounded lookahead, letting an
/// enclosing [`or`](crate::or::OrExt::or) abandon a probe that consumed
/// input before failing.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(ParseError::uncommitted)
    }
}

/// Convenience function to create an Attempt parser.
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}
