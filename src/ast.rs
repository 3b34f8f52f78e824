// ABOUTME: Untyped parse tree produced by the grammar, consumed by the reader

/// Tag on a parse-tree node, mirroring the tagged AST produced by a
/// general-purpose parser-combinator grammar. `Punctuation` and `Regex`
/// exist so the reader's skip-rule has something to skip even though this
/// grammar's own `parser` module never emits them; they are reserved for
/// alternate front ends that parse via a literal grammar with delimiter
/// tokens in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstTag {
    Number,
    Symbol,
    String,
    Comment,
    SExpr,
    QExpr,
    Root,
    Punctuation,
    Regex,
}

#[derive(Debug, Clone)]
pub struct AstNode {
    pub tag: AstTag,
    pub text: String,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn leaf(tag: AstTag, text: impl Into<String>) -> Self {
        AstNode {
            tag,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: AstTag, children: Vec<AstNode>) -> Self {
        AstNode {
            tag,
            text: String::new(),
            children,
        }
    }
}
