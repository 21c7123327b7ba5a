//! The closed set of callable functions and constants.
//!
//! Everything a caller can name lives here; a name outside this module
//! is an error, never a lookup into the host.

use opsbox_protocols::error::EvalError;

use super::ops::{self, as_float, float_to_int};
use super::Value;

/// Names accepted in call position.
pub(crate) const FUNCTIONS: &[&str] = &[
    "abs",
    "round",
    "min",
    "max",
    "sum",
    "pow",
    "sqrt",
    "sin",
    "cos",
    "tan",
    "log",
    "log10",
    "log2",
    "exp",
    "floor",
    "ceil",
    "factorial",
    "gcd",
    "degrees",
    "radians",
];

pub(crate) fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// Look up a named constant.
pub(crate) fn constant(name: &str) -> Option<Value> {
    let value = match name {
        "pi" => std::f64::consts::PI,
        "e" => std::f64::consts::E,
        "tau" => std::f64::consts::TAU,
        "inf" => f64::INFINITY,
        _ => return None,
    };
    Some(Value::Float(value))
}

/// Apply an allow-listed function to already-evaluated arguments.
pub(crate) fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    match name {
        "abs" => match exactly_one(name, args)? {
            Value::Int(i) => i
                .checked_abs()
                .map(Value::Int)
                .ok_or_else(|| EvalError::Domain("integer overflow in abs()".to_string())),
            Value::Float(f) => Ok(Value::Float(f.abs())),
            Value::Bool(b) => Ok(Value::Int(*b as i64)),
        },
        "round" => round(args),
        "min" => extreme(name, args, |candidate, best| candidate < best),
        "max" => extreme(name, args, |candidate, best| candidate > best),
        "sum" => args
            .iter()
            .try_fold(Value::Int(0), |acc, v| ops::add(&acc, v)),
        "pow" => {
            let (base, exp) = exactly_two(name, args)?;
            ops::pow(base, exp)
        }
        "sqrt" => {
            let x = as_float(exactly_one(name, args)?);
            if x < 0.0 {
                return Err(EvalError::Domain("sqrt() of a negative number".to_string()));
            }
            Ok(Value::Float(x.sqrt()))
        }
        "sin" => Ok(Value::Float(as_float(exactly_one(name, args)?).sin())),
        "cos" => Ok(Value::Float(as_float(exactly_one(name, args)?).cos())),
        "tan" => Ok(Value::Float(as_float(exactly_one(name, args)?).tan())),
        "log" => log(args),
        "log10" => Ok(Value::Float(positive(name, args)?.log10())),
        "log2" => Ok(Value::Float(positive(name, args)?.log2())),
        "exp" => Ok(Value::Float(as_float(exactly_one(name, args)?).exp())),
        "floor" => match exactly_one(name, args)? {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Bool(b) => Ok(Value::Int(*b as i64)),
            Value::Float(f) => float_to_int(f.floor(), "floor()").map(Value::Int),
        },
        "ceil" => match exactly_one(name, args)? {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Bool(b) => Ok(Value::Int(*b as i64)),
            Value::Float(f) => float_to_int(f.ceil(), "ceil()").map(Value::Int),
        },
        "factorial" => factorial(args),
        "gcd" => gcd(args),
        "degrees" => Ok(Value::Float(
            as_float(exactly_one(name, args)?).to_degrees(),
        )),
        "radians" => Ok(Value::Float(
            as_float(exactly_one(name, args)?).to_radians(),
        )),
        _ => Err(EvalError::UnknownName(name.to_string())),
    }
}

fn exactly_one<'a>(name: &str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [v] => Ok(v),
        _ => Err(EvalError::Domain(format!(
            "{}() takes exactly one argument",
            name
        ))),
    }
}

fn exactly_two<'a>(name: &str, args: &'a [Value]) -> Result<(&'a Value, &'a Value), EvalError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(EvalError::Domain(format!(
            "{}() takes exactly two arguments",
            name
        ))),
    }
}

fn integer(v: &Value, name: &str) -> Result<i64, EvalError> {
    match v {
        Value::Int(i) => Ok(*i),
        Value::Bool(b) => Ok(*b as i64),
        Value::Float(_) => Err(EvalError::Domain(format!("{}() requires integers", name))),
    }
}

fn positive(name: &str, args: &[Value]) -> Result<f64, EvalError> {
    let x = as_float(exactly_one(name, args)?);
    if x <= 0.0 {
        return Err(EvalError::Domain(format!(
            "{}() of a non-positive number",
            name
        )));
    }
    Ok(x)
}

/// One argument rounds half-to-even to an integer; a second argument
/// gives the number of decimal places and keeps the result a float.
fn round(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [Value::Int(i)] => Ok(Value::Int(*i)),
        [Value::Bool(b)] => Ok(Value::Int(*b as i64)),
        [Value::Float(f)] => float_to_int(f.round_ties_even(), "round()").map(Value::Int),
        [value, digits] => {
            let digits = integer(digits, "round")?;
            let digits = i32::try_from(digits)
                .map_err(|_| EvalError::Domain("round() digits out of range".to_string()))?;
            let factor = 10f64.powi(digits);
            Ok(Value::Float(
                (as_float(value) * factor).round_ties_even() / factor,
            ))
        }
        _ => Err(EvalError::Domain(
            "round() takes one or two arguments".to_string(),
        )),
    }
}

fn log(args: &[Value]) -> Result<Value, EvalError> {
    let (x, base) = match args {
        [x] => (as_float(x), None),
        [x, base] => (as_float(x), Some(as_float(base))),
        _ => {
            return Err(EvalError::Domain(
                "log() takes one or two arguments".to_string(),
            ));
        }
    };
    if x <= 0.0 {
        return Err(EvalError::Domain("log() of a non-positive number".to_string()));
    }
    match base {
        None => Ok(Value::Float(x.ln())),
        Some(base) if base > 0.0 && base != 1.0 => Ok(Value::Float(x.ln() / base.ln())),
        Some(_) => Err(EvalError::Domain("invalid logarithm base".to_string())),
    }
}

fn extreme(name: &str, args: &[Value], better: fn(f64, f64) -> bool) -> Result<Value, EvalError> {
    let mut iter = args.iter();
    let Some(first) = iter.next() else {
        return Err(EvalError::Domain(format!(
            "{}() expects at least one argument",
            name
        )));
    };
    let mut best = *first;
    for candidate in iter {
        if better(as_float(candidate), as_float(&best)) {
            best = *candidate;
        }
    }
    Ok(best)
}

// 20! is the largest factorial that fits in an i64.
const FACTORIAL_MAX: i64 = 20;

fn factorial(args: &[Value]) -> Result<Value, EvalError> {
    let n = integer(exactly_one("factorial", args)?, "factorial")?;
    if n < 0 {
        return Err(EvalError::Domain(
            "factorial() of a negative number".to_string(),
        ));
    }
    if n > FACTORIAL_MAX {
        return Err(EvalError::Domain(format!(
            "factorial() argument must be at most {}",
            FACTORIAL_MAX
        )));
    }
    Ok(Value::Int((2..=n).product()))
}

fn gcd(args: &[Value]) -> Result<Value, EvalError> {
    let mut result: u64 = 0;
    for arg in args {
        let mut a = result;
        let mut b = integer(arg, "gcd")?.unsigned_abs();
        while b != 0 {
            (a, b) = (b, a % b);
        }
        result = a;
    }
    i64::try_from(result)
        .map(Value::Int)
        .map_err(|_| EvalError::Domain("integer overflow in gcd()".to_string()))
}
