use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given
/// parser. The first occurrence is required; after that it behaves like
/// [`many`](crate::many::many).
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser.
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
