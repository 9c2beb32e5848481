use crate::cursor::StrCursor;
use crate::error::ParseError;

/// Outcome of running a parser: the parsed value and the advanced cursor,
/// or a failure pinned to the position where it was raised.
pub type ParseResult<'code, O> = Result<(O, StrCursor<'code>), ParseError<'code>>;

/// Core trait for parser combinators.
///
/// A parser is an immutable value; `parse` may be called any number of
/// times, on any input, from any thread. The amount of input consumed is
/// the distance between the returned cursor and the one passed in.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse starting at the given cursor position.
    ///
    /// On success, the returned cursor sits just past the consumed input.
    /// On failure, the error records whether the parse had already
    /// committed (consumed input inside a sequence); committed failures
    /// disable the fallback branch of [`or`](crate::or::OrExt::or).
    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output>;
}
