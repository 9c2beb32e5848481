use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// Never fails: on the first failure of the inner parser the accumulated
/// results are returned, positioned after the last success. The loop is
/// explicit rather than recursive, so input length does not grow the
/// stack. An inner parser that succeeds without consuming would spin
/// forever; grammar authors must not repeat over zero-width successes,
/// and debug builds assert progress on every iteration.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: StrCursor<'code>,
    ) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    debug_assert!(
                        next.offset() > cursor.offset(),
                        "repetition over a parser that consumes no input"
                    );
                    results.push(value);
                    cursor = next;
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser.
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
