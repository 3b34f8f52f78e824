//! Input/output: print, error, load
//!
//! `load` reads a whole file up front: if any top-level form fails to
//! parse, nothing in the file is evaluated and a single load error is
//! returned. Otherwise each form is evaluated in turn and any Error it
//! produces is printed rather than aborting the rest of the file.

use super::def;
use crate::env::Environment;
use crate::error::EvalError;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::fs;
use std::rc::Rc;

pub fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::empty_active())
}

pub fn builtin_error(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("error", 1, args.len()));
    }
    match &args[0] {
        Value::String(msg) => Ok(Value::Error(msg.clone())),
        other => Err(EvalError::type_error(
            "error",
            "String",
            other.type_name(),
            0,
        )),
    }
}

pub fn builtin_load(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("load", 1, args.len()));
    }
    let path = match &args[0] {
        Value::String(path) => path.clone(),
        other => {
            return Err(EvalError::type_error(
                "load",
                "String",
                other.type_name(),
                0,
            ))
        }
    };

    let contents = fs::read_to_string(&path)
        .map_err(|e| EvalError::custom(format!("Could not load Library {e}")))?;

    let mut forms = Vec::new();
    let mut rest: &str = &contents;
    loop {
        match parser::parse_one(rest) {
            Ok(None) => break,
            Ok(Some((node, remaining))) => {
                forms.push(reader::read(&node));
                rest = remaining;
            }
            Err(e) => return Err(EvalError::custom(format!("Could not load Library {e}"))),
        }
    }

    for form in forms {
        let result = crate::eval::eval(env, form);
        if let Value::Error(msg) = result {
            eprintln!("Error: {msg}");
        }
    }

    Ok(Value::empty_active())
}

pub fn register(env: &Rc<Environment>) {
    def(env, "print", builtin_print);
    def(env, "error", builtin_error);
    def(env, "load", builtin_load);
}
