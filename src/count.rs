use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches exactly `n` consecutive occurrences of
/// the given parser.
///
/// Fails on the k-th failure for any k < n. Iterated sequencing: a
/// failure after earlier iterations consumed input is committed.
/// `count(0, p)` succeeds with the empty vector and consumes nothing.
pub struct Count<P> {
    n: usize,
    parser: P,
}

impl<P> Count<P> {
    pub fn new(n: usize, parser: P) -> Self {
        Count { n, parser }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, start: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.n);
        let mut cursor = start;

        for _ in 0..self.n {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(err) if cursor.offset() > start.offset() => return Err(err.committed()),
                Err(err) => return Err(err),
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Count parser.
pub fn count<'code, P>(n: usize, parser: P) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(n, parser)
}
