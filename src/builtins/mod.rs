//! Built-in functions, grouped by category. Each sub-module owns a
//! `register` function that binds its functions into an environment;
//! `register_builtins` wires all of them into a fresh root environment.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Builtin, Function, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod bindings;
pub mod comparison;
pub mod control;
pub mod equality;
pub mod io;
pub mod lists;

/// Binds a builtin function under `name` in `env`.
pub(crate) fn def(
    env: &Rc<Environment>,
    name: &'static str,
    func: fn(&Rc<Environment>, Vec<Value>) -> Result<Value, EvalError>,
) {
    env.bind_local(name, Value::Function(Function::Builtin(Builtin { name, func })));
}

pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    equality::register(env);
    lists::register(env);
    control::register(env);
    bindings::register(env);
    io::register(env);
}
