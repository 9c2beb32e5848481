use std::borrow::Cow;

use thiserror::Error;

/// Where in the input a failure was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLoc<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> SourceLoc<'code> {
    pub fn new(source: &'code str, offset: usize) -> Self {
        SourceLoc { source, offset }
    }

    /// Byte offset of the failure within the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The character at the failure position, as a slice of the source.
    /// Empty at end of input.
    pub fn found(&self) -> &'code str {
        let rest = &self.source[self.offset..];
        match rest.chars().next() {
            Some(c) => &rest[..c.len_utf8()],
            None => "",
        }
    }
}

/// A parse failure.
///
/// The message starts out empty for primitive mismatches and is shaped by
/// the [`label`](crate::label::LabelExt::label) /
/// [`or_label`](crate::label::LabelExt::or_label) /
/// [`tag`](crate::tag::TagExt::tag) combinators on the way out. The
/// `committed` flag records that input was irreversibly consumed before
/// the failure; [`or`](crate::or::OrExt::or) refuses to try its fallback
/// for a committed failure, and [`attempt`](crate::attempt::attempt) is
/// the only way to clear the flag.
///
/// `Display` is the user-facing rendering:
/// `Error (<offset>): Found '<c>' but <message>`.
#[derive(Debug, Clone, Error)]
#[error("Error ({}): Found '{}' but {}", .loc.offset(), .loc.found(), .message)]
pub struct ParseError<'code> {
    message: Cow<'static, str>,
    loc: SourceLoc<'code>,
    committed: bool,
}

impl<'code> ParseError<'code> {
    /// An uncommitted failure with a message.
    pub fn new(message: impl Into<Cow<'static, str>>, loc: SourceLoc<'code>) -> Self {
        ParseError {
            message: message.into(),
            loc,
            committed: false,
        }
    }

    /// An uncommitted failure with an empty message: what every primitive
    /// raises on a plain mismatch.
    pub fn bare(loc: SourceLoc<'code>) -> Self {
        ParseError::new("", loc)
    }

    pub fn offset(&self) -> usize {
        self.loc.offset()
    }

    pub fn loc(&self) -> SourceLoc<'code> {
        self.loc
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// The failure with its commit flag set.
    pub fn committed(mut self) -> Self {
        self.committed = true;
        self
    }

    /// The failure with its commit flag cleared.
    pub fn uncommitted(mut self) -> Self {
        self.committed = false;
        self
    }

    /// Replace the message.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the message only when no deeper combinator installed one.
    pub fn with_message_if_empty(self, message: impl Into<Cow<'static, str>>) -> Self {
        if self.message.is_empty() {
            self.with_message(message)
        } else {
            self
        }
    }

    /// Append to the message.
    pub fn append_message(mut self, message: &str) -> Self {
        if self.message.is_empty() {
            self.message = message.to_owned().into();
        } else {
            self.message.to_mut().push_str(message);
        }
        self
    }
}

/// An owned, rendered diagnostic: what the top-level entry points hand to
/// callers once the grammar has given up. Produced exactly once per
/// failed parse, by [`run`](crate::driver::run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Diagnostic(String);

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ParseError<'_>> for Diagnostic {
    fn from(err: ParseError<'_>) -> Self {
        Diagnostic(err.to_string())
    }
}
