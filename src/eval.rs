// ABOUTME: The evaluator: active-list reduction and the application protocol

use crate::env::Environment;
use crate::value::{Function, Lambda, Value};
use std::collections::VecDeque;
use std::rc::Rc;

/// Evaluates a value in an environment. Numbers, strings, errors,
/// functions and quoted lists are self-evaluating; symbols resolve
/// through the environment chain; active lists are reduced by evaluating
/// their children left to right and, once none of them is an error,
/// applying the head to the rest.
pub fn eval(env: &Rc<Environment>, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.lookup(&name),
        Value::Active(items) => eval_active(env, items),
        other => other,
    }
}

fn eval_active(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    if items.is_empty() {
        return Value::empty_active();
    }

    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let result = eval(env, item);
        if matches!(result, Value::Error(_)) {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let mut iter = evaluated.into_iter();
    let head = iter.next().unwrap();
    let args: Vec<Value> = iter.collect();
    match head {
        Value::Function(func) => apply(env, func, args),
        other => Value::Error(format!(
            "S-Expression starts with incorrect type. Got {}, Expected Function.",
            other.type_name()
        )),
    }
}

/// Applies a function value to already-evaluated arguments.
pub fn apply(env: &Rc<Environment>, func: Function, args: Vec<Value>) -> Value {
    match func {
        Function::Builtin(b) => match (b.func)(env, args) {
            Ok(v) => v,
            Err(e) => Value::Error(e.to_string()),
        },
        Function::Lambda(l) => apply_lambda(env, l, args),
    }
}

/// Binds arguments to a lambda's parameters one at a time. A `&` marker
/// parameter collects the rest of the arguments as a single quoted list
/// (the variadic case). If every parameter gets bound, the lambda's
/// environment is reparented to the caller's environment and the body is
/// evaluated there; otherwise the partially applied lambda is returned so
/// the remaining parameters can be supplied by a later call.
fn apply_lambda(calling_env: &Rc<Environment>, l: Lambda, args: Vec<Value>) -> Value {
    let given = args.len();
    let total = l.params.len();
    let mut params: VecDeque<String> = l.params.into_iter().collect();
    let mut args: VecDeque<Value> = args.into_iter().collect();

    while !args.is_empty() {
        if params.is_empty() {
            return Value::Error(format!(
                "Function passed too many arguments. Got {given}, Expected {total}."
            ));
        }
        let param = params.pop_front().unwrap();
        if param == "&" {
            if params.len() != 1 {
                return Value::Error(
                    "Function format invalid. Symbol '&' not followed by 1 or more symbols"
                        .to_string(),
                );
            }
            let variadic_name = params.pop_front().unwrap();
            let rest: Vec<Value> = args.into_iter().collect();
            l.env.bind_local(&variadic_name, Value::Quoted(rest));
            params.clear();
            break;
        }
        let arg = args.pop_front().unwrap();
        l.env.bind_local(&param, arg);
    }

    if params.front().map(String::as_str) == Some("&") {
        if params.len() != 2 {
            return Value::Error(
                "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
            );
        }
        params.pop_front();
        let variadic_name = params.pop_front().unwrap();
        l.env.bind_local(&variadic_name, Value::Quoted(Vec::new()));
    }

    if params.is_empty() {
        l.env.set_parent(calling_env.clone());
        eval(&l.env, Value::Active(l.body))
    } else {
        Value::Function(Function::Lambda(Lambda {
            params: params.into_iter().collect(),
            body: l.body,
            env: l.env,
        }))
    }
}
