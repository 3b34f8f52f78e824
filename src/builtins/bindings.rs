//! Variable and function definition: def, =, \
//!
//! `def` binds in the global (root) environment; `=` binds in the local
//! one. `\` builds a lambda: a list of Symbol parameters plus a body,
//! captured with a fresh environment that is reparented to the caller's
//! environment on each application rather than to its defining scope.

use super::def as register_def;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Function, Lambda, Value};
use std::rc::Rc;

fn symbols_from_quoted(function: &str, value: &Value) -> Result<Vec<String>, EvalError> {
    let items = match value {
        Value::Quoted(items) => items,
        other => {
            return Err(EvalError::CannotDefineNonSymbol {
                function: function.to_string(),
                actual: other.type_name(),
            })
        }
    };
    items
        .iter()
        .map(|item| match item {
            Value::Symbol(s) => Ok(s.clone()),
            other => Err(EvalError::CannotDefineNonSymbol {
                function: function.to_string(),
                actual: other.type_name(),
            }),
        })
        .collect()
}

fn builtin_var(env: &Rc<Environment>, args: Vec<Value>, function: &str, global: bool) -> Result<Value, EvalError> {
    let mut args = args.into_iter();
    let names_value = args
        .next()
        .ok_or_else(|| EvalError::arity_error(function, 1, 0))?;
    let symbols = symbols_from_quoted(function, &names_value)?;
    let values: Vec<Value> = args.collect();
    if values.len() != symbols.len() {
        return Err(EvalError::TooManyArgumentsForSymbols {
            function: function.to_string(),
            expected: symbols.len(),
            actual: values.len(),
        });
    }
    for (name, value) in symbols.into_iter().zip(values) {
        if global {
            env.bind_global(&name, value);
        } else {
            env.bind_local(&name, value);
        }
    }
    Ok(Value::empty_active())
}

pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    builtin_var(env, args, "def", true)
}

pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    builtin_var(env, args, "=", false)
}

pub fn builtin_lambda(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("\\", 2, args.len()));
    }
    let mut args = args.into_iter();
    let formals = args.next().unwrap();
    let body = args.next().unwrap();

    let params = match &formals {
        Value::Quoted(items) => items
            .iter()
            .map(|item| match item {
                Value::Symbol(s) => Ok(s.clone()),
                other => Err(EvalError::LambdaNonSymbolParam {
                    actual: other.type_name(),
                }),
            })
            .collect::<Result<Vec<String>, EvalError>>()?,
        other => {
            return Err(EvalError::LambdaNonSymbolParam {
                actual: other.type_name(),
            })
        }
    };

    let body_items = match body {
        Value::Quoted(items) => items,
        other => {
            return Err(EvalError::type_error(
                "\\",
                "Q-Expression",
                other.type_name(),
                1,
            ))
        }
    };

    let _ = env;
    Ok(Value::Function(Function::Lambda(Lambda {
        params,
        body: body_items,
        env: Environment::root(),
    })))
}

pub fn register(env: &Rc<Environment>) {
    register_def(env, "def", builtin_def);
    register_def(env, "=", builtin_put);
    register_def(env, "\\", builtin_lambda);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_binds_globally() {
        let env = Environment::root();
        let child = Environment::child(env.clone());
        builtin_var(
            &child,
            vec![
                Value::Quoted(vec![Value::Symbol("x".to_string())]),
                Value::Number(5),
            ],
            "def",
            true,
        )
        .unwrap();
        assert!(matches!(env.lookup("x"), Value::Number(5)));
    }

    #[test]
    fn test_put_binds_locally() {
        let env = Environment::root();
        builtin_var(
            &env,
            vec![
                Value::Quoted(vec![Value::Symbol("x".to_string())]),
                Value::Number(1),
            ],
            "=",
            false,
        )
        .unwrap();
        assert!(matches!(env.lookup("x"), Value::Number(1)));
    }

    #[test]
    fn test_def_mismatched_symbol_and_value_count() {
        let env = Environment::root();
        let result = builtin_var(
            &env,
            vec![
                Value::Quoted(vec![
                    Value::Symbol("x".to_string()),
                    Value::Symbol("y".to_string()),
                ]),
                Value::Number(1),
            ],
            "def",
            true,
        );
        assert!(matches!(
            result,
            Err(EvalError::TooManyArgumentsForSymbols { .. })
        ));
    }

    #[test]
    fn test_lambda_builds_partial_application_ready_function() {
        let env = Environment::root();
        let result = builtin_lambda(
            &env,
            vec![
                Value::Quoted(vec![Value::Symbol("x".to_string())]),
                Value::Quoted(vec![Value::Symbol("x".to_string())]),
            ],
        )
        .unwrap();
        match result {
            Value::Function(Function::Lambda(l)) => assert_eq!(l.params, vec!["x".to_string()]),
            other => panic!("expected Lambda, got {other}"),
        }
    }

    #[test]
    fn test_lambda_rejects_non_symbol_formal() {
        let env = Environment::root();
        let result = builtin_lambda(
            &env,
            vec![
                Value::Quoted(vec![Value::Number(1)]),
                Value::Quoted(vec![]),
            ],
        );
        assert!(matches!(result, Err(EvalError::LambdaNonSymbolParam { .. })));
    }
}
