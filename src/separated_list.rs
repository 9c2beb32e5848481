use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more items separated by a
/// separator parser, without a trailing separator.
///
/// Equivalent to `(p ~ many(sep ~> p)) | empty`: an uncommitted failure
/// of the first item yields the empty list, while a *committed* one
/// propagates — the grammar was already invested in an element and the
/// alternative branch must not paper over it. Inside the loop, a
/// separator that is not followed by an item rolls back to before the
/// separator, which is what rejects trailing separators (the caller's
/// closing delimiter then fails there).
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `[1, 2, 3]`
/// - `""` → `[]`, consuming nothing
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = match self.parser.parse(cursor) {
            Ok(ok) => ok,
            Err(err) if err.is_committed() => return Err(err),
            Err(_) => return Ok((Vec::new(), cursor)),
        };

        let mut results = vec![first];
        loop {
            let after_sep = match self.separator.parse(cursor) {
                Ok((_, next)) => next,
                Err(_) => break,
            };
            match self.parser.parse(after_sep) {
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

/// Convenience function to create a SeparatedList parser.
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chr::is_char;
    use crate::cursor::StrCursor;
    use crate::map::MapExt;
    use crate::num::digits;

    #[test]
    fn test_empty_input_yields_empty_list() {
        let cursor = StrCursor::new("");
        let (results, cursor) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();

        assert_eq!(results, vec![]);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_no_leading_item_yields_empty_list() {
        let cursor = StrCursor::new("]rest");
        let (results, cursor) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_single_element() {
        let cursor = StrCursor::new("42");
        let (results, _) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();
        assert_eq!(results, vec![42]);
    }

    #[test]
    fn test_multiple_elements() {
        let cursor = StrCursor::new("1,2,3");
        let (results, cursor) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();

        assert_eq!(results, vec![1, 2, 3]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_trailing_separator_rolls_back() {
        let cursor = StrCursor::new("1,2,");
        let (results, cursor) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();

        // The list stops before the dangling comma; whatever follows the
        // list (a closing delimiter, end-of-input) will fail there.
        assert_eq!(results, vec![1, 2]);
        assert_eq!(cursor.peek(), Some(','));
    }

    #[test]
    fn test_committed_first_element_failure_propagates() {
        // An element that consumes before failing must not be silently
        // replaced by the empty list.
        let element = is_char('a').and(is_char('b')).map(|_| ());
        let cursor = StrCursor::new("ax");
        let err = separated_list(element, is_char(','))
            .parse(cursor)
            .unwrap_err();

        assert!(err.is_committed());
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_non_matching_separator_stops_list() {
        let cursor = StrCursor::new("1;2");
        let (results, cursor) = separated_list(digits(), is_char(','))
            .parse(cursor)
            .unwrap();

        assert_eq!(results, vec![1]);
        assert_eq!(cursor.peek(), Some(';'));
    }
}
