use std::borrow::Cow;

use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that replaces the message of a failure.
///
/// Success, failure position, and the commit flag are untouched; only
/// the message changes. This is how a grammar names the expectation it
/// owns, overriding whatever a deeper combinator said.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|err| err.with_message(self.message.clone()))
    }
}

/// Parser combinator that installs a message only when the failure has
/// none yet.
///
/// Bare primitive misses get promoted to grammar-level phrasing while a
/// more specific diagnostic from deeper inside survives untrampled.
pub struct OrLabel<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> OrLabel<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        OrLabel {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for OrLabel<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|err| err.with_message_if_empty(self.message.clone()))
    }
}

/// Extension trait adding the message-replacing combinators to all
/// parsers.
pub trait LabelExt<'code>: Parser<'code> + Sized {
    /// Replace the failure message with `message`.
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }

    /// Install `message` only if the failure carries no message yet.
    fn or_label(self, message: impl Into<Cow<'static, str>>) -> OrLabel<Self> {
        OrLabel::new(self, message)
    }
}

impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}
