use std::borrow::Cow;

use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that appends text to the message of a failure.
///
/// Where [`label`](crate::label::LabelExt::label) replaces, `tag`
/// accumulates: the deeper diagnostic stays and the appended text adds
/// the enclosing context. Success, position, and commit flag pass
/// through untouched.
pub struct Tag<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Tag<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Tag {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Tag<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|err| err.append_message(&self.message))
    }
}

/// Extension trait to add `.tag()` method support for parsers.
pub trait TagExt<'code>: Parser<'code> + Sized {
    fn tag(self, message: impl Into<Cow<'static, str>>) -> Tag<Self> {
        Tag::new(self, message)
    }
}

impl<'code, P> TagExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chr::is_char;
    use crate::cursor::StrCursor;
    use crate::label::LabelExt;

    #[test]
    fn test_tag_appends_to_existing_message() {
        let cursor = StrCursor::new("x");
        let err = is_char('a')
            .label("expected 'a'")
            .tag(" at start of word")
            .parse(cursor)
            .unwrap_err();

        assert_eq!(err.message(), "expected 'a' at start of word");
    }

    #[test]
    fn test_tag_on_bare_failure() {
        let cursor = StrCursor::new("x");
        let err = is_char('a').tag("expected 'a'").parse(cursor).unwrap_err();

        assert_eq!(err.message(), "expected 'a'");
    }

    #[test]
    fn test_tags_accumulate_in_order() {
        let cursor = StrCursor::new("x");
        let err = is_char('a')
            .tag("one")
            .tag(", two")
            .parse(cursor)
            .unwrap_err();

        assert_eq!(err.message(), "one, two");
    }

    #[test]
    fn test_tag_does_not_touch_success() {
        let cursor = StrCursor::new("a");
        assert!(is_char('a').tag("unused").parse(cursor).is_ok());
    }
}
