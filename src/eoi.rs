use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds, with an empty string and no consumption, only at
/// the end of the input.
pub struct Eoi;

impl<'code> Parser<'code> for Eoi {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.at_end() {
            Ok(("", cursor))
        } else {
            Err(ParseError::bare(cursor.loc()))
        }
    }
}

/// Convenience function to create an end-of-input parser.
pub fn eoi() -> Eoi {
    Eoi
}
