//! Conditional branching: if
//!
//! `(if cond {then} {else})` evaluates exactly one of its branch
//! Q-Expressions, chosen by treating any nonzero Number as true.

use super::def;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_if(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 3 {
        return Err(EvalError::arity_error("if", 3, args.len()));
    }
    let mut args = args.into_iter();
    let condition = args.next().unwrap();
    let then_branch = args.next().unwrap();
    let else_branch = args.next().unwrap();

    let truthy = match condition {
        Value::Number(n) => n != 0,
        other => {
            return Err(EvalError::type_error(
                "if",
                "Number",
                other.type_name(),
                0,
            ))
        }
    };

    let branch = if truthy { then_branch } else { else_branch };
    match branch {
        Value::Quoted(items) => Ok(crate::eval::eval(env, Value::Active(items))),
        other => Err(EvalError::type_error(
            "if",
            "Q-Expression",
            other.type_name(),
            if truthy { 1 } else { 2 },
        )),
    }
}

pub fn register(env: &Rc<Environment>) {
    def(env, "if", builtin_if);
}
