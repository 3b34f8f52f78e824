//! List manipulation over quoted lists: list, head, tail, join, eval, len
//!
//! These all operate on Q-Expressions, the dialect's inert list type.
//! `eval` is the one builtin that turns a Q-Expression back into an
//! Active-list and reduces it.

use super::def;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn take_quoted(name: &str, args: &[Value], position: usize) -> Result<Vec<Value>, EvalError> {
    match args.get(position) {
        Some(Value::Quoted(items)) => Ok(items.clone()),
        Some(other) => Err(EvalError::type_error(
            name,
            "Q-Expression",
            other.type_name(),
            position,
        )),
        None => Err(EvalError::arity_error(name, position + 1, args.len())),
    }
}

pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    Ok(Value::Quoted(args))
}

pub fn builtin_head(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("head", 1, args.len()));
    }
    let items = take_quoted("head", &args, 0)?;
    match items.first() {
        Some(first) => Ok(Value::Quoted(vec![first.clone()])),
        None => Err(EvalError::empty_argument("head", 0)),
    }
}

pub fn builtin_tail(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("tail", 1, args.len()));
    }
    let mut items = take_quoted("tail", &args, 0)?;
    if items.is_empty() {
        return Err(EvalError::empty_argument("tail", 0));
    }
    items.remove(0);
    Ok(Value::Quoted(items))
}

pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Quoted(items) => joined.extend(items),
            other => {
                return Err(EvalError::type_error(
                    "join",
                    "Q-Expression",
                    other.type_name(),
                    i,
                ))
            }
        }
    }
    Ok(Value::Quoted(joined))
}

pub fn builtin_eval(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("eval", 1, args.len()));
    }
    let items = take_quoted("eval", &args, 0)?;
    Ok(crate::eval::eval(env, Value::Active(items)))
}

pub fn builtin_len(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("len", 1, args.len()));
    }
    let items = take_quoted("len", &args, 0)?;
    Ok(Value::Number(items.len() as i64))
}

pub fn register(env: &Rc<Environment>) {
    def(env, "list", builtin_list);
    def(env, "head", builtin_head);
    def(env, "tail", builtin_tail);
    def(env, "join", builtin_join);
    def(env, "eval", builtin_eval);
    def(env, "len", builtin_len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_wraps_arguments() {
        let env = Environment::root();
        let result = builtin_list(&env, vec![Value::Number(1), Value::Number(2)]);
        assert!(matches!(result, Ok(Value::Quoted(items)) if items.len() == 2));
    }

    #[test]
    fn test_head_returns_singleton_list() {
        let env = Environment::root();
        let arg = Value::Quoted(vec![Value::Number(1), Value::Number(2)]);
        let result = builtin_head(&env, vec![arg]).unwrap();
        match result {
            Value::Quoted(items) => assert_eq!(items, vec![Value::Number(1)]),
            other => panic!("expected Quoted, got {other}"),
        }
    }

    #[test]
    fn test_head_of_empty_list_is_error() {
        let env = Environment::root();
        let result = builtin_head(&env, vec![Value::Quoted(vec![])]);
        assert!(matches!(result, Err(EvalError::EmptyArgument { .. })));
    }

    #[test]
    fn test_tail_drops_first_element() {
        let env = Environment::root();
        let arg = Value::Quoted(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let result = builtin_tail(&env, vec![arg]).unwrap();
        match result {
            Value::Quoted(items) => assert_eq!(items.len(), 2),
            other => panic!("expected Quoted, got {other}"),
        }
    }

    #[test]
    fn test_join_concatenates() {
        let env = Environment::root();
        let a = Value::Quoted(vec![Value::Number(1)]);
        let b = Value::Quoted(vec![Value::Number(2)]);
        let result = builtin_join(&env, vec![a, b]).unwrap();
        match result {
            Value::Quoted(items) => assert_eq!(items.len(), 2),
            other => panic!("expected Quoted, got {other}"),
        }
    }

    #[test]
    fn test_eval_reduces_quoted_list() {
        let env = Environment::root();
        super::super::arithmetic::register(&env);
        let body = Value::Quoted(vec![
            Value::Symbol("+".to_string()),
            Value::Number(1),
            Value::Number(2),
        ]);
        let result = builtin_eval(&env, vec![body]).unwrap();
        assert!(matches!(result, Value::Number(3)));
    }
}
