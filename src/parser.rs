// ABOUTME: Parser-combinator grammar turning source text into an untyped AST

use crate::ast::{AstNode, AstTag};
use nom::branch::alt;
use nom::bytes::complete::{escaped, take_while1};
use nom::character::complete::{char as nom_char, multispace0, none_of, one_of};
use nom::combinator::{map, opt, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair};
use nom::IResult;
use nom::Parser;

const SYMBOL_INITIAL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_+-*/\\=<>!&%|";
const SYMBOL_REST: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&%|";

fn comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = nom_char(';')(input)?;
    let (input, _) = nom::bytes::complete::take_till(|c| c == '\n')(input)?;
    Ok((input, ()))
}

/// Whitespace and line comments, eaten between tokens.
fn gap(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = many0(pair(comment, multispace0)).parse(input)?;
    Ok((input, ()))
}

fn number(input: &str) -> IResult<&str, AstNode> {
    map(
        recognize(pair(
            opt(nom_char('-')),
            take_while1(|c: char| c.is_ascii_digit()),
        )),
        |text: &str| AstNode::leaf(AstTag::Number, text),
    )
    .parse(input)
}

fn symbol(input: &str) -> IResult<&str, AstNode> {
    map(
        recognize(pair(
            one_of(SYMBOL_INITIAL),
            nom::bytes::complete::take_while(|c: char| SYMBOL_REST.contains(c)),
        )),
        |text: &str| AstNode::leaf(AstTag::Symbol, text),
    )
    .parse(input)
}

fn string_literal(input: &str) -> IResult<&str, AstNode> {
    let (input, _) = nom_char('"')(input)?;
    let (input, contents) = opt(escaped(none_of("\"\\"), '\\', one_of("\"\\nrt"))).parse(input)?;
    let (input, _) = nom_char('"')(input)?;
    Ok((
        input,
        AstNode::leaf(AstTag::String, unescape(contents.unwrap_or(""))),
    ))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn sexpr(input: &str) -> IResult<&str, AstNode> {
    map(
        delimited(
            pair(nom_char('('), gap),
            many0(delimited(gap, expr, gap)),
            nom_char(')'),
        ),
        |children| AstNode::branch(AstTag::SExpr, children),
    )
    .parse(input)
}

fn qexpr(input: &str) -> IResult<&str, AstNode> {
    map(
        delimited(
            pair(nom_char('{'), gap),
            many0(delimited(gap, expr, gap)),
            nom_char('}'),
        ),
        |children| AstNode::branch(AstTag::QExpr, children),
    )
    .parse(input)
}

fn expr(input: &str) -> IResult<&str, AstNode> {
    alt((number, symbol, string_literal, sexpr, qexpr)).parse(input)
}

/// Parses an entire input as a sequence of top-level forms wrapped in a
/// single `Root` node. Used for REPL lines, where every top-level form on
/// one line is bundled as one s-expression at read time.
pub fn parse_program(input: &str) -> Result<AstNode, String> {
    let (rest, _) = gap(input).map_err(|e| e.to_string())?;
    let (rest, children) = many0(delimited(gap, expr, gap))
        .parse(rest)
        .map_err(|e| e.to_string())?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected input: {rest}"));
    }
    Ok(AstNode::branch(AstTag::Root, children))
}

/// Parses a single top-level form, returning it together with the
/// remaining unconsumed input. Used by the file loader to read and
/// evaluate each top-level form independently.
pub fn parse_one(input: &str) -> Result<Option<(AstNode, &str)>, String> {
    let (rest, _) = gap(input).map_err(|e| e.to_string())?;
    if rest.is_empty() {
        return Ok(None);
    }
    let (rest, node) = expr(rest).map_err(|e| e.to_string())?;
    Ok(Some((node, rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_number() {
        let node = expr("42").unwrap().1;
        assert_eq!(node.tag, AstTag::Number);
        assert_eq!(node.text, "42");
    }

    #[test]
    fn test_parses_negative_number() {
        let node = expr("-7").unwrap().1;
        assert_eq!(node.tag, AstTag::Number);
        assert_eq!(node.text, "-7");
    }

    #[test]
    fn test_parses_symbol() {
        let node = expr("+").unwrap().1;
        assert_eq!(node.tag, AstTag::Symbol);
        assert_eq!(node.text, "+");
    }

    #[test]
    fn test_parses_string_with_escapes() {
        let node = expr("\"a\\nb\"").unwrap().1;
        assert_eq!(node.tag, AstTag::String);
        assert_eq!(node.text, "a\nb");
    }

    #[test]
    fn test_parses_nested_sexpr() {
        let node = expr("(+ 1 (* 2 3))").unwrap().1;
        assert_eq!(node.tag, AstTag::SExpr);
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[2].tag, AstTag::SExpr);
    }

    #[test]
    fn test_parses_qexpr() {
        let node = expr("{1 2 3}").unwrap().1;
        assert_eq!(node.tag, AstTag::QExpr);
        assert_eq!(node.children.len(), 3);
    }

    #[test]
    fn test_skips_comments() {
        let node = expr("(+ 1 ; a comment\n 2)").unwrap().1;
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn test_program_bundles_multiple_top_level_forms() {
        let root = parse_program("+ 1 (* 7 5) 3").unwrap();
        assert_eq!(root.tag, AstTag::Root);
        assert_eq!(root.children.len(), 4);
    }

    #[test]
    fn test_parse_one_reads_single_form_and_rest() {
        let (node, rest) = parse_one("(+ 1 2) (+ 3 4)").unwrap().unwrap();
        assert_eq!(node.tag, AstTag::SExpr);
        assert_eq!(rest.trim(), "(+ 3 4)");
    }
}
