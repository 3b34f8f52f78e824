// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use crate::error::EvalError;
use std::fmt;
use std::rc::Rc;

/// A builtin is identified by name (for error messages) plus a plain
/// function pointer. Two builtins are equal iff they share the same
/// pointer, never by name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&Rc<Environment>, Vec<Value>) -> Result<Value, EvalError>,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.func as *const (), other.func as *const ())
    }
}

/// A user-defined closure: parameter names, an unevaluated body (the
/// children of the quoted-list the `\` form was given), and the
/// environment captured at the time the closure was built.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub params: Vec<String>,
    pub body: Vec<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Lambda),
}

#[derive(Debug)]
#[allow(clippy::derive_partial_eq_without_eq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    String(String),
    /// An s-expression: evaluation applies its head to the evaluated tail.
    Active(Vec<Value>),
    /// A q-expression: inert data, the runtime's list type.
    Quoted(Vec<Value>),
    Function(Function),
}

impl Value {
    /// The type-name token used in error messages (§7 of the language spec).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::Active(_) => "S-Expression",
            Value::Quoted(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    pub fn empty_active() -> Value {
        Value::Active(Vec::new())
    }

    /// Structural equality per the `==`/`!=` builtins: same variant,
    /// numbers by value, strings/symbols/errors by byte identity, lists
    /// pointwise, user functions by parameter-and-body equality, builtins
    /// by operator identity. Functions of different shapes are unequal.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Active(a), Value::Active(b)) | (Value::Quoted(a), Value::Quoted(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structural_eq(y))
            }
            (Value::Function(Function::Builtin(a)), Value::Function(Function::Builtin(b))) => {
                a == b
            }
            (Value::Function(Function::Lambda(a)), Value::Function(Function::Lambda(b))) => {
                a.params == b.params
                    && a.body.len() == b.body.len()
                    && a.body.iter().zip(&b.body).all(|(x, y)| x.structural_eq(y))
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

/// Copying a value is deep: list children are copied recursively and a
/// closure's captured environment is deep-copied too. Built-in function
/// references are the one thing copied by identity, not by cloning.
impl Clone for Value {
    fn clone(&self) -> Value {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(s) => Value::Error(s.clone()),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::String(s) => Value::String(s.clone()),
            Value::Active(items) => Value::Active(items.iter().map(Value::clone).collect()),
            Value::Quoted(items) => Value::Quoted(items.iter().map(Value::clone).collect()),
            Value::Function(Function::Builtin(b)) => Value::Function(Function::Builtin(*b)),
            Value::Function(Function::Lambda(l)) => Value::Function(Function::Lambda(Lambda {
                params: l.params.clone(),
                body: l.body.iter().map(Value::clone).collect(),
                env: l.env.deep_copy(),
            })),
        }
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(msg) => write!(f, "Error: {msg}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Active(items) => write_list(f, items, '(', ')'),
            Value::Quoted(items) => write_list(f, items, '{', '}'),
            Value::Function(Function::Builtin(_)) => write!(f, "<builtin>"),
            Value::Function(Function::Lambda(l)) => {
                let params = Value::Quoted(l.params.iter().cloned().map(Value::Symbol).collect());
                let body = Value::Quoted(l.body.clone());
                write!(f, "(\\ {params} {body})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Value::Number(42)), "42");
        assert_eq!(format!("{}", Value::Number(-7)), "-7");
    }

    #[test]
    fn test_list_display() {
        let list = Value::Quoted(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(format!("{list}"), "{1 2}");

        let active = Value::Active(vec![Value::Symbol("+".into()), Value::Number(1)]);
        assert_eq!(format!("{active}"), "(+ 1)");
    }

    #[test]
    fn test_string_display_escapes() {
        let s = Value::String("line\nend".to_string());
        assert_eq!(format!("{s}"), "\"line\\nend\"");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Value::Error("Division By Zero".to_string())),
            "Error: Division By Zero"
        );
    }

    #[test]
    fn test_structural_eq_lists() {
        let a = Value::Quoted(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let b = Value::Quoted(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let c = Value::Quoted(vec![Value::Number(1), Value::Number(2)]);
        assert!(a.structural_eq(&b));
        assert!(!a.structural_eq(&c));
    }

    #[test]
    fn test_builtins_equal_by_identity_only() {
        fn f(_: &Rc<Environment>, _: Vec<Value>) -> Result<Value, EvalError> {
            Ok(Value::empty_active())
        }
        let a = Value::Function(Function::Builtin(Builtin { name: "f", func: f }));
        let b = Value::Function(Function::Builtin(Builtin { name: "f", func: f }));
        assert!(a.structural_eq(&b));
    }
}
