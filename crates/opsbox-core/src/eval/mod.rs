//! Sandboxed arithmetic expression evaluation.
//!
//! Expressions come from a language model acting on untrusted user
//! text, so the language is a closed grammar with its own parser:
//! numeric literals, unary sign, `+ - * / // % **`, comparisons, calls
//! to a fixed function set, and a fixed constant set. There is no name
//! resolution beyond [`functions`], no attribute access, and no way to
//! reach host code.
//!
//! # Example
//!
//! ```rust
//! use opsbox_core::eval::ExpressionEvaluator;
//!
//! let evaluator = ExpressionEvaluator::new();
//! let value = evaluator.evaluate("sqrt(16) + 2 ** 3").unwrap();
//! assert_eq!(value.to_string(), "12");
//! ```

mod functions;
mod lexer;
mod ops;
mod parser;

use std::fmt;

use opsbox_protocols::error::EvalError;

use self::parser::{BinaryOp, Expr, Parser, UnaryOp};

/// Result of evaluating an expression.
///
/// Integer arithmetic stays integral; `/`, the math functions, and the
/// constants produce floats; comparisons produce booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "nan"),
            Value::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "inf" } else { "-inf" })
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Evaluator for the restricted expression language.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    /// Create a new expression evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Parse and evaluate an expression.
    pub fn evaluate(&self, expression: &str) -> Result<Value, EvalError> {
        if expression.trim().is_empty() {
            return Err(EvalError::Empty);
        }
        let ast = Parser::new(expression)?.parse()?;
        eval_expr(&ast)
    }
}

fn eval_expr(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Float(f) => Ok(Value::Float(*f)),

        Expr::Name(name) => {
            functions::constant(name).ok_or_else(|| EvalError::UnknownName(name.clone()))
        }

        Expr::Call { name, args } => {
            // The callee is checked before the arguments run, so an
            // unknown name is reported as such rather than whatever the
            // arguments happen to raise.
            if !functions::is_function(name) {
                return Err(EvalError::UnknownName(name.clone()));
            }
            let values = args
                .iter()
                .map(eval_expr)
                .collect::<Result<Vec<_>, _>>()?;
            functions::call(name, &values)
        }

        Expr::Unary { op, operand } => {
            let value = eval_expr(operand)?;
            match op {
                UnaryOp::Neg => ops::neg(&value),
                UnaryOp::Pos => ops::pos(&value),
            }
        }

        Expr::Binary { left, op, right } => {
            let l = eval_expr(left)?;
            let r = eval_expr(right)?;
            match op {
                BinaryOp::Add => ops::add(&l, &r),
                BinaryOp::Sub => ops::sub(&l, &r),
                BinaryOp::Mul => ops::mul(&l, &r),
                BinaryOp::Div => ops::div(&l, &r),
                BinaryOp::FloorDiv => ops::floor_div(&l, &r),
                BinaryOp::Mod => ops::modulo(&l, &r),
                BinaryOp::Pow => ops::pow(&l, &r),
                BinaryOp::Lt => Ok(ops::compare(&l, &r, |a, b| a < b)),
                BinaryOp::Le => Ok(ops::compare(&l, &r, |a, b| a <= b)),
                BinaryOp::Gt => Ok(ops::compare(&l, &r, |a, b| a > b)),
                BinaryOp::Ge => Ok(ops::compare(&l, &r, |a, b| a >= b)),
                BinaryOp::Eq => Ok(ops::compare(&l, &r, |a, b| a == b)),
                BinaryOp::Ne => Ok(ops::compare(&l, &r, |a, b| a != b)),
            }
        }
    }
}
