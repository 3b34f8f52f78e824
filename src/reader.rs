// ABOUTME: Converts an untyped parse tree into runtime values

use crate::ast::{AstNode, AstTag};
use crate::value::Value;

/// Builds a runtime value from a parse-tree node. Numbers that overflow
/// an `i64` become an Invalid Number error value rather than a panic, and
/// `Punctuation`/`Regex` children (delimiter tokens from a literal
/// grammar) are skipped rather than read.
pub fn read(node: &AstNode) -> Value {
    match node.tag {
        AstTag::Number => match node.text.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Error("Invalid Number".to_string()),
        },
        AstTag::Symbol => Value::Symbol(node.text.clone()),
        AstTag::String => Value::String(node.text.clone()),
        AstTag::SExpr | AstTag::Root => Value::Active(read_children(node)),
        AstTag::QExpr => Value::Quoted(read_children(node)),
        AstTag::Comment | AstTag::Punctuation | AstTag::Regex => Value::empty_active(),
    }
}

fn read_children(node: &AstNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|c| !matches!(c.tag, AstTag::Punctuation | AstTag::Regex | AstTag::Comment))
        .map(read)
        .collect()
}
