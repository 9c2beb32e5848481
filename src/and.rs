use crate::cursor::StrCursor;
use crate::map::Map;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and yields both results
/// as a tuple.
///
/// This is where commitment originates: if the first parser consumed any
/// input and the second then fails, the failure is marked committed —
/// sequencing past non-zero consumption is irrevocable, and an enclosing
/// [`or`](crate::or::OrExt::or) will not fall back across it. Wrap with
/// [`attempt`](crate::attempt::attempt) to opt back into backtracking.
///
/// Chained `.and()` calls produce nested tuples, `((a, b), c)`;
/// destructuring at the `map` site keeps the parse order explicit.
pub struct And<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        And { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mid) = self.first.parse(cursor)?;
        match self.second.parse(mid) {
            Ok((second, end)) => Ok(((first, second), end)),
            Err(err) if mid.offset() > cursor.offset() => Err(err.committed()),
            Err(err) => Err(err),
        }
    }
}

/// Convenience function to create an And parser.
pub fn and<'code, P1, P2>(first: P1, second: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(first, second)
}

/// Extension trait adding sequencing methods to all parsers.
pub trait AndExt<'code>: Parser<'code> + Sized {
    /// `self` then `other`, yielding both values.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    /// `self` then `other`, keeping only `other`'s value.
    fn ignore_then<P>(
        self,
        other: P,
    ) -> Map<And<Self, P>, fn((Self::Output, P::Output)) -> P::Output>
    where
        P: Parser<'code>,
    {
        Map::new(And::new(self, other), |(_, right)| right)
    }

    /// `self` then `other`, keeping only `self`'s value.
    fn then_ignore<P>(
        self,
        other: P,
    ) -> Map<And<Self, P>, fn((Self::Output, P::Output)) -> Self::Output>
    where
        P: Parser<'code>,
    {
        Map::new(And::new(self, other), |(left, _)| left)
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
