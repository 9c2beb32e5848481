//! # descent — parser combinators with a commit/backtrack discipline
//!
//! Composable, type-safe parsers over an in-memory string, built for
//! recursive-descent grammars with explicit ordered choice. The library
//! emphasizes:
//!
//! - **Zero panics while parsing**: every failure travels through
//!   `Result`; construction panics only on invalid regex literals.
//! - **Commitment over furthest-error heuristics**: a sequence that has
//!   consumed input marks its failure *committed*; ordered choice
//!   refuses to backtrack across it, and [`attempt`](attempt::attempt)
//!   is the single escape hatch. Diagnostics land where the grammar was
//!   invested, not at a vague no-alternative-matched.
//! - **Layered messages**: primitives fail silently; grammars install
//!   their own phrasing with [`label`](label::LabelExt::label),
//!   [`or_label`](label::LabelExt::or_label), and
//!   [`tag`](tag::TagExt::tag); rendering into the user-facing
//!   diagnostic happens exactly once, in [`driver::run`].
//!
//! Two front-ends double as worked examples: [`json`] parses an RFC 8259
//! subset into a value tree and [`calc`] parses and evaluates arithmetic
//! expressions.

pub mod and;
pub mod and_then;
pub mod attempt;
pub mod between;
pub mod boxed;
pub mod calc;
pub mod chr;
pub mod count;
pub mod cursor;
pub mod driver;
pub mod eoi;
pub mod error;
pub mod json;
pub mod label;
pub mod lazy;
pub mod lit;
pub mod many;
pub mod map;
pub mod num;
pub mod or;
pub mod parser;
pub mod re;
pub mod separated_list;
pub mod some;
pub mod tag;
pub mod trim;

pub use and::{and, AndExt};
pub use and_then::{and_then, AndThenExt};
pub use attempt::attempt;
pub use between::between;
pub use boxed::{BoxedExt, BoxedParser};
pub use calc::parse_calculator;
pub use chr::is_char;
pub use count::count;
pub use cursor::StrCursor;
pub use driver::{complete, run};
pub use eoi::eoi;
pub use error::{Diagnostic, ParseError, SourceLoc};
pub use json::{parse_json, JsonValue};
pub use label::LabelExt;
pub use lazy::lazy;
pub use lit::lit;
pub use many::many;
pub use map::MapExt;
pub use num::{digit, digits, number};
pub use or::{or, OrExt};
pub use parser::{ParseResult, Parser};
pub use re::{re, Re};
pub use separated_list::separated_list;
pub use some::some;
pub use tag::TagExt;
pub use trim::{spaces, trim, trim_spaces};
