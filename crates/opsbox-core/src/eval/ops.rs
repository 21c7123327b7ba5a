//! Operator semantics.
//!
//! Arithmetic follows the conventions of the expressions the agent
//! writes: `/` is true division and always yields a float, `//` floors,
//! `%` takes the sign of the divisor, and integer arithmetic stays
//! integral. Integer overflow is reported as a domain error instead of
//! wrapping.

use opsbox_protocols::error::EvalError;

use super::Value;

pub(crate) fn as_float(v: &Value) -> f64 {
    match v {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => *b as i64 as f64,
    }
}

/// Both operands as integers, when integer arithmetic applies. Booleans
/// count as 0/1.
fn as_int_pair(l: &Value, r: &Value) -> Option<(i64, i64)> {
    let int_of = |v: &Value| match v {
        Value::Int(i) => Some(*i),
        Value::Bool(b) => Some(*b as i64),
        Value::Float(_) => None,
    };
    Some((int_of(l)?, int_of(r)?))
}

fn overflow(op: &str) -> EvalError {
    EvalError::Domain(format!("integer overflow in {}", op))
}

pub(crate) fn add(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        return a
            .checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| overflow("addition"));
    }
    Ok(Value::Float(as_float(l) + as_float(r)))
}

pub(crate) fn sub(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        return a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| overflow("subtraction"));
    }
    Ok(Value::Float(as_float(l) - as_float(r)))
}

pub(crate) fn mul(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        return a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| overflow("multiplication"));
    }
    Ok(Value::Float(as_float(l) * as_float(r)))
}

/// True division: always a float, like `7 / 2 == 3.5`.
pub(crate) fn div(l: &Value, r: &Value) -> Result<Value, EvalError> {
    let divisor = as_float(r);
    if divisor == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Float(as_float(l) / divisor))
}

pub(crate) fn floor_div(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        let q = a
            .checked_div(b)
            .ok_or_else(|| overflow("floor division"))?;
        let floored = if a % b != 0 && (a < 0) != (b < 0) {
            q - 1
        } else {
            q
        };
        return Ok(Value::Int(floored));
    }
    let divisor = as_float(r);
    if divisor == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Float((as_float(l) / divisor).floor()))
}

/// Modulo with the divisor's sign: `-7 % 3 == 2`, `7 % -3 == -2`.
pub(crate) fn modulo(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        let rem = a.checked_rem(b).ok_or_else(|| overflow("modulo"))?;
        let adjusted = if rem != 0 && (rem < 0) != (b < 0) {
            rem + b
        } else {
            rem
        };
        return Ok(Value::Int(adjusted));
    }
    let divisor = as_float(r);
    if divisor == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let rem = as_float(l) % divisor;
    let adjusted = if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    };
    Ok(Value::Float(adjusted))
}

pub(crate) fn pow(l: &Value, r: &Value) -> Result<Value, EvalError> {
    if let Some((a, b)) = as_int_pair(l, r) {
        if b >= 0 {
            let exp = u32::try_from(b).map_err(|_| overflow("power"))?;
            return a
                .checked_pow(exp)
                .map(Value::Int)
                .ok_or_else(|| overflow("power"));
        }
        if a == 0 {
            return Err(EvalError::DivisionByZero);
        }
        return Ok(Value::Float((a as f64).powf(b as f64)));
    }

    let base = as_float(l);
    let exp = as_float(r);
    if base == 0.0 && exp < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(EvalError::Domain(
            "negative number cannot be raised to a fractional power".to_string(),
        ));
    }
    Ok(Value::Float(base.powf(exp)))
}

pub(crate) fn neg(v: &Value) -> Result<Value, EvalError> {
    match v {
        Value::Int(i) => i
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| overflow("negation")),
        Value::Float(f) => Ok(Value::Float(-f)),
        Value::Bool(b) => Ok(Value::Int(-(*b as i64))),
    }
}

pub(crate) fn pos(v: &Value) -> Result<Value, EvalError> {
    match v {
        Value::Int(_) | Value::Float(_) => Ok(*v),
        Value::Bool(b) => Ok(Value::Int(*b as i64)),
    }
}

/// Numeric comparison; int/float mixes compare by value, booleans as
/// 0/1.
pub(crate) fn compare(l: &Value, r: &Value, cmp: fn(f64, f64) -> bool) -> Value {
    Value::Bool(cmp(as_float(l), as_float(r)))
}

/// Converts a float that is conceptually an integer result (floor, ceil,
/// round) into one, rejecting values outside the representable range.
pub(crate) fn float_to_int(f: f64, context: &str) -> Result<i64, EvalError> {
    if !f.is_finite() {
        return Err(EvalError::Domain(format!(
            "cannot convert {} to an integer",
            Value::Float(f)
        )));
    }
    if f < i64::MIN as f64 || f > i64::MAX as f64 {
        return Err(overflow(context));
    }
    Ok(f as i64)
}
