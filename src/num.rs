use once_cell::sync::Lazy;
use regex::Regex;

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};
use crate::re::Re;
use crate::some::some;

/// JSON-compatible number token: optional sign, integer part without
/// leading zeros, optional fraction, optional exponent.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    match Regex::new(r"\A-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[Ee][+-]?(?:0|[1-9][0-9]*))?") {
        Ok(regex) => regex,
        Err(err) => panic!("number regex failed to compile: {err}"),
    }
});

/// Parser that matches a single decimal digit and yields its numeric
/// value.
pub struct Digit;

impl<'code> Parser<'code> for Digit {
    type Output = u32;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.peek().and_then(|c| c.to_digit(10)) {
            Some(value) => Ok((value, cursor.advance(1))),
            None => Err(ParseError::bare(cursor.loc())),
        }
    }
}

/// One decimal digit, as its numeric value.
pub fn digit() -> Digit {
    Digit
}

/// One or more decimal digits, folded left-to-right into a non-negative
/// integer (saturating on absurdly long runs).
pub fn digits<'code>() -> impl Parser<'code, Output = u64> {
    some(digit()).map(|ds| {
        ds.into_iter()
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
    })
}

/// Parser for a signed decimal number with optional fractional and
/// exponent parts, converted to `f64`.
///
/// The token is the JSON number grammar: leading zeros (`01`) and hex
/// forms (`0x10`) do not extend the match.
pub struct Number {
    token: Re,
}

impl<'code> Parser<'code> for Number {
    type Output = f64;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (text, next) = self.token.parse(cursor)?;
        match text.parse::<f64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(ParseError::new("malformed number", cursor.loc())),
        }
    }
}

/// JSON-compatible signed decimal number as `f64`.
pub fn number() -> Number {
    Number {
        token: Re::from_regex(NUMBER.clone()),
    }
}
