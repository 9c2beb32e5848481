use once_cell::sync::Lazy;
use regex::Regex;

use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};
use crate::re::Re;

static SPACES: Lazy<Regex> = Lazy::new(|| match Regex::new(r"\A\s*") {
    Ok(regex) => regex,
    Err(err) => panic!("whitespace regex failed to compile: {err}"),
});

/// Parser matching a possibly-empty run of whitespace characters.
pub fn spaces() -> Re {
    Re::from_regex(SPACES.clone())
}

/// Parser combinator that skips around its content symmetrically: skip,
/// content, skip.
///
/// Skipping is not sequencing: the content's failure passes through with
/// its commit flag untouched, no matter how much the leading skip
/// consumed. (Leading whitespace must not commit a grammar to a value
/// that never started.) Failures of the skip parser itself are ignored
/// on both sides.
pub struct Trim<S, P> {
    skip: S,
    parser: P,
}

impl<S, P> Trim<S, P> {
    pub fn new(skip: S, parser: P) -> Self {
        Trim { skip, parser }
    }
}

impl<'code, S, P> Parser<'code> for Trim<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let cursor = match self.skip.parse(cursor) {
            Ok((_, next)) => next,
            Err(_) => cursor,
        };
        let (value, cursor) = self.parser.parse(cursor)?;
        let cursor = match self.skip.parse(cursor) {
            Ok((_, next)) => next,
            Err(_) => cursor,
        };
        Ok((value, cursor))
    }
}

/// Convenience function to create a Trim parser with an arbitrary skip
/// parser.
pub fn trim<'code, S, P>(skip: S, parser: P) -> Trim<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    Trim::new(skip, parser)
}

/// Trim whitespace on both sides of `parser`.
pub fn trim_spaces<'code, P>(parser: P) -> Trim<Re, P>
where
    P: Parser<'code>,
{
    Trim::new(spaces(), parser)
}
