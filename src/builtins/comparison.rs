//! Ordering comparisons: >, <, >=, <=
//!
//! Each takes exactly two Numbers and returns a Number: 1 for true, 0 for
//! false, matching the dialect's lack of a separate boolean type.

use super::def;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn ordering(name: &str, args: Vec<Value>, op: fn(i64, i64) -> bool) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error(name, 2, args.len()));
    }
    let mut nums = Vec::with_capacity(2);
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Number(n) => nums.push(n),
            other => return Err(EvalError::type_error(name, "Number", other.type_name(), i)),
        }
    }
    Ok(Value::Number(if op(nums[0], nums[1]) { 1 } else { 0 }))
}

pub fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering(">", args, |a, b| a > b)
}

pub fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering("<", args, |a, b| a < b)
}

pub fn builtin_ge(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering(">=", args, |a, b| a >= b)
}

pub fn builtin_le(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering("<=", args, |a, b| a <= b)
}

pub fn builtin_or(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering("||", args, |a, b| a != 0 || b != 0)
}

pub fn builtin_and(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    ordering("&&", args, |a, b| a != 0 && b != 0)
}

pub fn builtin_not(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("!", 1, args.len()));
    }
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(if *n == 0 { 1 } else { 0 })),
        other => Err(EvalError::type_error("!", "Number", other.type_name(), 0)),
    }
}

pub fn register(env: &Rc<Environment>) {
    def(env, ">", builtin_gt);
    def(env, "<", builtin_lt);
    def(env, ">=", builtin_ge);
    def(env, "<=", builtin_le);
    def(env, "||", builtin_or);
    def(env, "&&", builtin_and);
    def(env, "!", builtin_not);
}
