//! JSON front-end: a recursive grammar over the combinator core,
//! producing a tagged value tree with positional diagnostics.

use std::fmt;
use std::fmt::Write as _;
use std::str::Chars;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::and::AndExt;
use crate::between::between;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::chr::is_char;
use crate::driver::run;
use crate::error::Diagnostic;
use crate::label::LabelExt;
use crate::lazy::lazy;
use crate::lit::lit;
use crate::map::MapExt;
use crate::num::number;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::re::Re;
use crate::separated_list::separated_list;
use crate::trim::trim_spaces;

/// A parsed JSON value.
///
/// Objects keep their pairs in insertion order; a duplicate key
/// overwrites the earlier value in place (last wins).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Look up a key in an object. `None` for missing keys and for
    /// non-object values.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl fmt::Display for JsonValue {
    /// Serializes back to JSON text; arrays and objects keep parse order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(b) => write!(f, "{b}"),
            JsonValue::Number(n) => write!(f, "{n}"),
            JsonValue::String(s) => write_escaped(f, s),
            JsonValue::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            JsonValue::Object(pairs) => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped(f, key)?;
                    f.write_char(':')?;
                    write!(f, "{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Parse a JSON document.
///
/// Accepts the RFC 8259 subset described by the grammar below;
/// surrounding whitespace is tolerated everywhere a value can appear.
/// On failure the single rendered diagnostic is returned; no partial
/// tree survives.
pub fn parse_json(text: &str) -> Result<JsonValue, Diagnostic> {
    run(value(), text)
}

fn value<'code>() -> BoxedParser<'code, JsonValue> {
    trim_spaces(
        null_value()
            .or(bool_value())
            .or(number_value())
            .or(string_value())
            .or(array_value())
            .or(object_value())
            .or_label("illegal start of JSON value"),
    )
    .boxed()
}

fn null_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    lit("null").map(|_| JsonValue::Null)
}

fn bool_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    lit("true")
        .map(|_| JsonValue::Bool(true))
        .or(lit("false").map(|_| JsonValue::Bool(false)))
}

fn number_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    number().map(JsonValue::Number)
}

fn string_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    string_literal().map(JsonValue::String)
}

/// Raw body of a string literal: everything a double quote closes, with
/// backslash escapes left intact for the decoding pass.
static STRING_BODY: Lazy<Regex> = Lazy::new(|| {
    match Regex::new(r#"\A(?:[^"\\]|\\[\\"/bfnrtu])*"#) {
        Ok(regex) => regex,
        Err(err) => panic!("string body regex failed to compile: {err}"),
    }
});

fn string_literal<'code>() -> impl Parser<'code, Output = String> {
    is_char('"')
        .ignore_then(Re::from_regex(STRING_BODY.clone()))
        .then_ignore(is_char('"'))
        .map(unescape)
}

fn array_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    between(
        is_char('['),
        separated_list(lazy(value), is_char(',')),
        trim_spaces(is_char(']')).or_label("expected ']'"),
    )
    .map(JsonValue::Array)
}

fn object_value<'code>() -> impl Parser<'code, Output = JsonValue> {
    between(
        is_char('{'),
        separated_list(pair(), is_char(',')),
        trim_spaces(is_char('}')).or_label("expected '}'"),
    )
    .map(|pairs| JsonValue::Object(collapse(pairs)))
}

fn pair<'code>() -> impl Parser<'code, Output = (String, JsonValue)> {
    trim_spaces(string_literal())
        .then_ignore(is_char(':'))
        .and(lazy(value))
}

/// Last occurrence of a key wins; its value overwrites the earlier entry
/// in place, keeping the key's original position.
fn collapse(pairs: Vec<(String, JsonValue)>) -> Vec<(String, JsonValue)> {
    let mut object: Vec<(String, JsonValue)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match object.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => object.push((key, value)),
        }
    }
    object
}

/// Decode the escape sequences of a raw string body.
///
/// `\uXXXX` escapes become the code point they name; a surrogate pair is
/// combined into its supplementary-plane character, an unpaired
/// surrogate becomes U+FFFD, and a `\u` without four hex digits is kept
/// as literal text (the body regex does not guarantee the tail).
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => unescape_unicode(&mut chars, &mut out),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

fn unescape_unicode(chars: &mut Chars<'_>, out: &mut String) {
    let mut probe = chars.clone();
    let Some(unit) = hex4(&mut probe) else {
        out.push_str("\\u");
        return;
    };
    *chars = probe;

    if (0xD800..0xDC00).contains(&unit) {
        // High surrogate: only meaningful with a low surrogate escape
        // immediately following.
        let mut pair = chars.clone();
        if pair.next() == Some('\\') && pair.next() == Some('u') {
            if let Some(low) = hex4(&mut pair) {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    if let Some(c) = char::from_u32(combined) {
                        out.push(c);
                        *chars = pair;
                        return;
                    }
                }
            }
        }
        out.push('\u{FFFD}');
        return;
    }

    match char::from_u32(unit) {
        Some(c) => out.push(c),
        None => out.push('\u{FFFD}'),
    }
}
