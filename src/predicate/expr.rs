//! Textual predicate expressions.
//!
//! Scenes describe what to shade with a small boolean language over region
//! names:
//! - `f`, `universe` - a named region
//! - `true`, `false` - constants
//! - `!f` - complement
//! - `f & g` - intersection
//! - `f ^ g` - symmetric difference
//! - `f | g` - union
//! - `f -> g` - "f only if g" (right-associative)
//! - `f <-> g` - biconditional
//!
//! Operators are listed from tightest to loosest binding; parentheses group.

use std::fmt;

use crate::error::{Result, VennError};

use super::{algebra, Predicate};

/// A parsed predicate expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateExpr {
    /// `true` or `false`.
    Const(bool),
    /// A reference to a named region.
    Region(String),
    Not(Box<PredicateExpr>),
    And(Box<PredicateExpr>, Box<PredicateExpr>),
    Or(Box<PredicateExpr>, Box<PredicateExpr>),
    Xor(Box<PredicateExpr>, Box<PredicateExpr>),
    OnlyIf(Box<PredicateExpr>, Box<PredicateExpr>),
    Iff(Box<PredicateExpr>, Box<PredicateExpr>),
}

impl PredicateExpr {
    /// Parse an expression from a string.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(parse_error("Empty predicate expression", None));
        }

        let mut parser = Parser::new(tokens);
        let (expr, _) = parser.iff()?;

        match parser.peek() {
            None => Ok(expr),
            Some(token) => Err(parse_error(
                format!("Unexpected '{}' in '{}'", token, input.trim()),
                Some("Join terms with &, |, ^, -> or <->"),
            )),
        }
    }

    /// Names of every region referenced, in first-use order.
    pub fn regions(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_regions(&mut names);
        names
    }

    fn collect_regions<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            PredicateExpr::Const(_) => {}
            PredicateExpr::Region(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
            PredicateExpr::Not(inner) => inner.collect_regions(names),
            PredicateExpr::And(a, b)
            | PredicateExpr::Or(a, b)
            | PredicateExpr::Xor(a, b)
            | PredicateExpr::OnlyIf(a, b)
            | PredicateExpr::Iff(a, b) => {
                a.collect_regions(names);
                b.collect_regions(names);
            }
        }
    }

    /// Build the predicate this expression denotes.
    ///
    /// `lookup` resolves region names; an unknown name is an error.
    pub fn compile<F>(&self, lookup: &F) -> Result<Predicate>
    where
        F: Fn(&str) -> Option<Predicate>,
    {
        let binary = |a: &PredicateExpr, b: &PredicateExpr| -> Result<(Predicate, Predicate)> {
            Ok((a.compile(lookup)?, b.compile(lookup)?))
        };

        Ok(match self {
            PredicateExpr::Const(true) => Predicate::always(),
            PredicateExpr::Const(false) => Predicate::never(),
            PredicateExpr::Region(name) => lookup(name.as_str()).ok_or_else(|| {
                parse_error(
                    format!("Undefined region: {}", name),
                    Some("Declare the region under `regions:`"),
                )
            })?,
            PredicateExpr::Not(inner) => algebra::not(&inner.compile(lookup)?),
            PredicateExpr::And(a, b) => {
                let (f, g) = binary(a, b)?;
                algebra::and(&f, &g)
            }
            PredicateExpr::Or(a, b) => {
                let (f, g) = binary(a, b)?;
                algebra::or(&f, &g)
            }
            PredicateExpr::Xor(a, b) => {
                let (f, g) = binary(a, b)?;
                algebra::xor(&f, &g)
            }
            PredicateExpr::OnlyIf(a, b) => {
                let (f, g) = binary(a, b)?;
                algebra::implies_only_if(&f, &g)
            }
            PredicateExpr::Iff(a, b) => {
                let (f, g) = binary(a, b)?;
                algebra::iff(&f, &g)
            }
        })
    }
}

impl fmt::Display for PredicateExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateExpr::Const(value) => write!(f, "{}", value),
            PredicateExpr::Region(name) => write!(f, "{}", name),
            PredicateExpr::Not(inner) => write!(f, "!{}", inner),
            PredicateExpr::And(a, b) => write!(f, "({} & {})", a, b),
            PredicateExpr::Or(a, b) => write!(f, "({} | {})", a, b),
            PredicateExpr::Xor(a, b) => write!(f, "({} ^ {})", a, b),
            PredicateExpr::OnlyIf(a, b) => write!(f, "({} -> {})", a, b),
            PredicateExpr::Iff(a, b) => write!(f, "({} <-> {})", a, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Not,
    And,
    Or,
    Xor,
    OnlyIf,
    Iff,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Ident(name) => name.as_str(),
            Token::Not => "!",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::OnlyIf => "->",
            Token::Iff => "<->",
            Token::LParen => "(",
            Token::RParen => ")",
        };
        write!(f, "{}", s)
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '^' => Token::Xor,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '-' if input[start..].starts_with("->") => {
                chars.next();
                Token::OnlyIf
            }
            '<' if input[start..].starts_with("<->") => {
                chars.next();
                chars.next();
                Token::Iff
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        end = i + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(input[start..end].to_string())
            }
            other => {
                return Err(parse_error(
                    format!("Unexpected character '{}' in '{}'", other, input.trim()),
                    Some("Operators are !, &, |, ^, -> and <->"),
                ))
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Deepest expression tree the parser will build.
pub const MAX_DEPTH: usize = 256;

/// An expression with the height of its tree.
type Parsed = (PredicateExpr, usize);

type BinaryNode = fn(Box<PredicateExpr>, Box<PredicateExpr>) -> PredicateExpr;

/// Recursive-descent parser, one method per precedence level.
///
/// `nesting` bounds the parser's own recursion; the height carried with
/// each [`Parsed`] bounds the tree, which long operator chains deepen
/// without recursing.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(too_deep());
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn iff(&mut self) -> Result<Parsed> {
        let mut lhs = self.only_if()?;
        while self.eat(&Token::Iff) {
            let rhs = self.only_if()?;
            lhs = join(lhs, rhs, PredicateExpr::Iff)?;
        }
        Ok(lhs)
    }

    fn only_if(&mut self) -> Result<Parsed> {
        let lhs = self.or()?;
        if self.eat(&Token::OnlyIf) {
            self.enter()?;
            let rhs = self.only_if()?;
            self.leave();
            return join(lhs, rhs, PredicateExpr::OnlyIf);
        }
        Ok(lhs)
    }

    fn or(&mut self) -> Result<Parsed> {
        let mut lhs = self.xor()?;
        while self.eat(&Token::Or) {
            let rhs = self.xor()?;
            lhs = join(lhs, rhs, PredicateExpr::Or)?;
        }
        Ok(lhs)
    }

    fn xor(&mut self) -> Result<Parsed> {
        let mut lhs = self.and()?;
        while self.eat(&Token::Xor) {
            let rhs = self.and()?;
            lhs = join(lhs, rhs, PredicateExpr::Xor)?;
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Parsed> {
        let mut lhs = self.unary()?;
        while self.eat(&Token::And) {
            let rhs = self.unary()?;
            lhs = join(lhs, rhs, PredicateExpr::And)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Parsed> {
        if self.eat(&Token::Not) {
            self.enter()?;
            let (inner, height) = self.unary()?;
            self.leave();
            return checked(PredicateExpr::Not(Box::new(inner)), height + 1);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Parsed> {
        let token = self.peek().cloned();
        self.pos += 1;

        match token {
            Some(Token::Ident(name)) => {
                let expr = match name.as_str() {
                    "true" => PredicateExpr::Const(true),
                    "false" => PredicateExpr::Const(false),
                    _ => PredicateExpr::Region(name),
                };
                Ok((expr, 1))
            }
            Some(Token::LParen) => {
                self.enter()?;
                let inner = self.iff()?;
                self.leave();
                if !self.eat(&Token::RParen) {
                    return Err(parse_error("Unclosed parenthesis", Some("Add a closing )")));
                }
                Ok(inner)
            }
            Some(other) => Err(parse_error(
                format!("Expected a region name, found '{}'", other),
                None,
            )),
            None => Err(parse_error("Expression ends early", None)),
        }
    }
}

fn join(lhs: Parsed, rhs: Parsed, node: BinaryNode) -> Result<Parsed> {
    let height = lhs.1.max(rhs.1) + 1;
    checked(node(Box::new(lhs.0), Box::new(rhs.0)), height)
}

fn checked(expr: PredicateExpr, height: usize) -> Result<Parsed> {
    if height > MAX_DEPTH {
        return Err(too_deep());
    }
    Ok((expr, height))
}

fn too_deep() -> VennError {
    parse_error(
        format!("Expression nests deeper than {} levels", MAX_DEPTH),
        Some("Split the layer into simpler expressions"),
    )
}

fn parse_error(message: impl Into<String>, help: Option<&str>) -> VennError {
    VennError::Parse {
        message: message.into(),
        help: help.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn region(name: &str) -> Box<PredicateExpr> {
        Box::new(PredicateExpr::Region(name.to_string()))
    }

    #[test]
    fn test_parse_single_region() {
        assert_eq!(
            PredicateExpr::parse("  f ").unwrap(),
            PredicateExpr::Region("f".to_string())
        );
    }

    #[test]
    fn test_parse_precedence() {
        let expr = PredicateExpr::parse("!f & g | h").unwrap();
        assert_eq!(
            expr,
            PredicateExpr::Or(
                Box::new(PredicateExpr::And(
                    Box::new(PredicateExpr::Not(region("f"))),
                    region("g")
                )),
                region("h")
            )
        );
    }

    #[test]
    fn test_only_if_is_right_associative() {
        let expr = PredicateExpr::parse("f -> g -> h").unwrap();
        assert_eq!(
            expr,
            PredicateExpr::OnlyIf(region("f"), Box::new(PredicateExpr::OnlyIf(region("g"), region("h"))))
        );
    }

    #[test]
    fn test_display_round_trips_structure() {
        let expr = PredicateExpr::parse("f <-> (g ^ !h)").unwrap();
        assert_eq!(expr.to_string(), "(f <-> (g ^ !h))");
        assert_eq!(PredicateExpr::parse(&expr.to_string()).unwrap(), expr);
    }

    #[test]
    fn test_constants_and_regions() {
        let expr = PredicateExpr::parse("(f | true) & g & f & false").unwrap();
        assert_eq!(expr.regions(), vec!["f", "g"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(PredicateExpr::parse("").is_err());
        assert!(PredicateExpr::parse("f &").is_err());
        assert!(PredicateExpr::parse("(f | g").is_err());
        assert!(PredicateExpr::parse("f g").is_err());
        assert!(PredicateExpr::parse("f + g").is_err());
        assert!(PredicateExpr::parse("f - g").is_err());
        assert!(PredicateExpr::parse("f < g").is_err());
    }

    #[test]
    fn test_compile_resolves_regions() {
        let lookup = |name: &str| match name {
            "right" => Some(Predicate::new(|x, _| x > 0.0)),
            "up" => Some(Predicate::new(|_, y| y > 0.0)),
            _ => None,
        };

        let p = PredicateExpr::parse("right -> up").unwrap().compile(&lookup).unwrap();
        assert!(p.eval(-1.0, -1.0).unwrap());
        assert!(!p.eval(1.0, -1.0).unwrap());
        assert!(p.eval(1.0, 1.0).unwrap());

        let missing = PredicateExpr::parse("right & nowhere").unwrap().compile(&lookup);
        assert!(missing.is_err());
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let deep = [
            format!("{}f", "!".repeat(200_000)),
            format!("{}f{}", "(".repeat(200_000), ")".repeat(200_000)),
            "f -> ".repeat(100_000) + "f",
            "f & ".repeat(100_000) + "f",
        ];

        for input in &deep {
            let err = PredicateExpr::parse(input).unwrap_err();
            assert!(matches!(err, VennError::Parse { .. }));
            assert!(err.to_string().contains("deeper than"));
        }
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let nots = format!("{}f", "!".repeat(MAX_DEPTH - 1));
        assert!(PredicateExpr::parse(&nots).is_ok());

        let parens = format!("{}f{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(
            PredicateExpr::parse(&parens).unwrap(),
            PredicateExpr::Region("f".to_string())
        );

        let chain = "f | ".repeat(MAX_DEPTH - 1) + "f";
        assert!(PredicateExpr::parse(&chain).is_ok());
    }
}
