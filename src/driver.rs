use crate::and::AndExt;
use crate::cursor::StrCursor;
use crate::eoi::eoi;
use crate::error::Diagnostic;
use crate::label::LabelExt;
use crate::parser::Parser;

/// Pair a grammar with the end-of-input check: the grammar's value is
/// kept, and leftover input fails with the standard trailing-characters
/// message.
pub fn complete<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    parser.then_ignore(eoi().label("there should be no trailing characters"))
}

/// Run a grammar over a whole input string.
///
/// This is the single render point: a failure leaves here as the owned,
/// user-facing [`Diagnostic`], `Error (<offset>): Found '<c>' but
/// <message>`. No partial results survive a failed parse.
pub fn run<'code, P>(parser: P, input: &'code str) -> Result<P::Output, Diagnostic>
where
    P: Parser<'code>,
{
    match complete(parser).parse(StrCursor::new(input)) {
        Ok((value, _)) => Ok(value),
        Err(err) => Err(Diagnostic::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lit::lit;
    use crate::num::digits;

    #[test]
    fn test_run_success() {
        let value = run(digits(), "123").unwrap();
        assert_eq!(value, 123);
    }

    #[test]
    fn test_run_rejects_trailing_input() {
        let diag = run(digits(), "12x").unwrap_err();
        assert_eq!(
            diag.message(),
            "Error (2): Found 'x' but there should be no trailing characters"
        );
    }

    #[test]
    fn test_run_renders_grammar_failure() {
        let diag = run(lit("yes").label("expected 'yes'"), "no").unwrap_err();
        assert_eq!(diag.message(), "Error (0): Found 'n' but expected 'yes'");
    }

    #[test]
    fn test_run_at_end_of_input_renders_empty_found() {
        let diag = run(lit("ab").label("expected 'ab'"), "a").unwrap_err();
        assert_eq!(diag.message(), "Error (0): Found 'a' but expected 'ab'");
    }

    #[test]
    fn test_run_empty_input_needs_full_match() {
        assert!(run(lit(""), "").is_ok());
        assert!(run(lit(""), "x").is_err());
    }
}
