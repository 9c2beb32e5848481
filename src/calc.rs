//! Calculator front-end: a precedence-climbing grammar over `+ - * /`
//! with unary minus and parentheses, evaluated over `f64`.

use crate::and::AndExt;
use crate::attempt::attempt;
use crate::between::between;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::chr::is_char;
use crate::driver::run;
use crate::error::Diagnostic;
use crate::label::LabelExt;
use crate::lazy::lazy;
use crate::many::many;
use crate::map::MapExt;
use crate::num::number;
use crate::or::OrExt;
use crate::parser::Parser;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Times,
    Div,
}

/// A parsed arithmetic expression.
///
/// Unary minus is encoded as multiplication by `-1`, keeping the variant
/// set at two.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    BinOp(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluate by post-order walk. Division delegates to `f64`, so
    /// division by zero follows IEEE-754: `1/0` is positive infinity,
    /// `-1/0` negative infinity, `0/0` NaN.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::BinOp(op, left, right) => {
                let (l, r) = (left.eval(), right.eval());
                match op {
                    Op::Plus => l + r,
                    Op::Minus => l - r,
                    Op::Times => l * r,
                    Op::Div => l / r,
                }
            }
        }
    }

    fn binop(op: Op, left: Expr, right: Expr) -> Expr {
        Expr::BinOp(op, Box::new(left), Box::new(right))
    }

    fn negated(self) -> Expr {
        Expr::binop(Op::Times, self, Expr::Number(-1.0))
    }
}

/// Parse and evaluate an arithmetic expression.
///
/// All whitespace is stripped before parsing, so `" - - 1"` and `"--1"`
/// are the same input (both double negations of `1`).
pub fn parse_calculator(text: &str) -> Result<f64, Diagnostic> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    run(expr(), &stripped).map(|tree| tree.eval())
}

/// Parse an arithmetic expression to its tree, without evaluating.
pub fn parse_expr(text: &str) -> Result<Expr, Diagnostic> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    run(expr(), &stripped)
}

fn fold_left((first, rest): (Expr, Vec<(Op, Expr)>)) -> Expr {
    rest.into_iter()
        .fold(first, |acc, (op, rhs)| Expr::binop(op, acc, rhs))
}

fn expr<'code>() -> BoxedParser<'code, Expr> {
    term().and(many(add_op().and(term()))).map(fold_left).boxed()
}

fn term<'code>() -> impl Parser<'code, Output = Expr> {
    factor().and(many(mul_op().and(factor()))).map(fold_left)
}

/// A factor, with the unary-minus forms tried before the bare recursion
/// so a consumed `'-'` cannot commit past the cheaper alternatives.
fn factor<'code>() -> impl Parser<'code, Output = Expr> {
    number()
        .map(Expr::Number)
        .or(parens())
        .or(attempt(is_char('-').ignore_then(number().map(Expr::Number))).map(Expr::negated))
        .or(attempt(is_char('-').ignore_then(parens())).map(Expr::negated))
        .or(is_char('-').ignore_then(lazy(expr)).map(Expr::negated))
        .or_label("illegal start of expression")
}

fn parens<'code>() -> impl Parser<'code, Output = Expr> {
    between(
        is_char('('),
        lazy(expr),
        is_char(')').or_label("expected ')'"),
    )
}

fn add_op<'code>() -> impl Parser<'code, Output = Op> {
    is_char('+')
        .map(|_| Op::Plus)
        .or(is_char('-').map(|_| Op::Minus))
}

fn mul_op<'code>() -> impl Parser<'code, Output = Op> {
    is_char('*')
        .map(|_| Op::Times)
        .or(is_char('/').map(|_| Op::Div))
}
