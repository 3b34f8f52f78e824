//! Arithmetic operations: +, -, *, /, %
//!
//! All operate on a variadic list of Numbers. `-` and `/` treat a single
//! argument as negation and reciprocal-style division from zero is
//! rejected rather than silently producing a fraction, since this
//! dialect has no fractional numbers.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn require_numbers(name: &str, args: &[Value]) -> Result<Vec<i64>, EvalError> {
    args.iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Number(n) => Ok(*n),
            other => Err(EvalError::type_error(name, "Number", other.type_name(), i)),
        })
        .collect()
}

fn fold(name: &str, args: Vec<Value>, op: fn(i64, i64) -> Result<i64, EvalError>) -> Result<Value, EvalError> {
    let numbers = require_numbers(name, &args)?;
    let mut iter = numbers.into_iter();
    let mut acc = match iter.next() {
        Some(n) => n,
        None => return Err(EvalError::arity_error(name, 1, 0)),
    };
    if name == "-" && iter.len() == 0 {
        return Ok(Value::Number(acc.wrapping_neg()));
    }
    for n in iter {
        acc = op(acc, n)?;
    }
    Ok(Value::Number(acc))
}

pub fn builtin_add(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("+", args, |a, b| Ok(a.wrapping_add(b)))
}

pub fn builtin_sub(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("-", args, |a, b| Ok(a.wrapping_sub(b)))
}

pub fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("*", args, |a, b| Ok(a.wrapping_mul(b)))
}

pub fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("/", args, |a, b| {
        if b == 0 {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(a / b)
        }
    })
}

pub fn builtin_mod(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    fold("%", args, |a, b| {
        if b == 0 {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(a % b)
        }
    })
}

pub fn register(env: &Rc<Environment>) {
    use super::def;
    def(env, "+", builtin_add);
    def(env, "add", builtin_add);
    def(env, "-", builtin_sub);
    def(env, "sub", builtin_sub);
    def(env, "*", builtin_mul);
    def(env, "mul", builtin_mul);
    def(env, "/", builtin_div);
    def(env, "div", builtin_div);
    def(env, "%", builtin_mod);
    def(env, "mod", builtin_mod);
}
