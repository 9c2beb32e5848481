use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters,
/// yielding only the content's value.
///
/// Failure of the closing delimiter is committed by the sequencing rule
/// (the opener consumed input), so a mismatched bracket is reported in
/// context instead of being silently abandoned by an outer alternative.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, start: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let commit_past =
            |cursor: StrCursor<'code>, err: ParseError<'code>| {
                if cursor.offset() > start.offset() {
                    err.committed()
                } else {
                    err
                }
            };

        let (_, cursor) = self.open.parse(start)?;
        let (value, cursor) = self
            .content
            .parse(cursor)
            .map_err(|err| commit_past(cursor, err))?;
        let (_, cursor) = self
            .close
            .parse(cursor)
            .map_err(|err| commit_past(cursor, err))?;

        Ok((value, cursor))
    }
}

/// Convenience function to create a Between parser.
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
