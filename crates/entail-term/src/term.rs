//! The s-expression term algebra.
//!
//! A [`Term`] is either an atom — a constant symbol or a pattern
//! variable — or a list of sub-terms. Variables are atoms whose first
//! character is a backtick (`` ` ``); their identity is the remaining
//! characters. Terms are value types: equality and hashing are
//! structural, matching the canonical printed form.

use crate::error::{TermError, TermResult};
use std::fmt;

/// A ground or variable-containing s-expression term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A pattern variable, identified by the name following the backtick.
    Var(String),
    /// An opaque constant symbol.
    Const(String),
    /// An ordered list of sub-terms, printed `(e1 e2 …)`.
    List(Vec<Term>),
}

impl Term {
    /// Parse a single term from its canonical textual form.
    ///
    /// The grammar is `term := atom | "(" term+ ")"`, where atoms are
    /// maximal runs of non-whitespace, non-paren bytes. A leading
    /// backtick marks the atom as a pattern variable.
    pub fn parse(text: &str) -> TermResult<Term> {
        let tokens = tokenize(text)?;
        if tokens.is_empty() {
            return Err(TermError::EmptyInput);
        }
        let mut pos = 0;
        let term = parse_term(&tokens, &mut pos)?;
        if pos != tokens.len() {
            let rest = tokens[pos..]
                .iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            return Err(TermError::TrailingTokens(rest));
        }
        Ok(term)
    }

    /// True if this term is a pattern variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    /// True if this term contains no pattern variables anywhere.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Const(_) => true,
            Term::List(items) => items.iter().all(Term::is_ground),
        }
    }

    fn head_const(&self) -> Option<&str> {
        match self {
            Term::List(items) => match items.first() {
                Some(Term::Const(c)) => Some(c.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// If this term is `(binary == lhs rhs)`, return `(lhs, rhs)`.
    pub fn as_binary_eq(&self) -> Option<(&Term, &Term)> {
        if self.head_const() != Some("binary") {
            return None;
        }
        match self {
            Term::List(items) if items.len() == 4 => match &items[1] {
                Term::Const(op) if op == "==" => Some((&items[2], &items[3])),
                _ => None,
            },
            _ => None,
        }
    }

    /// Build the term `(binary == lhs rhs)`.
    pub fn binary_eq(lhs: Term, rhs: Term) -> Term {
        Term::List(vec![
            Term::Const("binary".to_string()),
            Term::Const("==".to_string()),
            lhs,
            rhs,
        ])
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "`{}", name),
            Term::Const(name) => write!(f, "{}", name),
            Term::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LParen,
    RParen,
    Atom(String),
}

impl Token {
    fn as_str(&self) -> &str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Atom(s) => s.as_str(),
        }
    }
}

fn tokenize(text: &str) -> TermResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut atom = String::new();
    let flush = |atom: &mut String, tokens: &mut Vec<Token>| {
        if !atom.is_empty() {
            tokens.push(Token::Atom(std::mem::take(atom)));
        }
    };
    for ch in text.chars() {
        match ch {
            '(' => {
                flush(&mut atom, &mut tokens);
                tokens.push(Token::LParen);
            }
            ')' => {
                flush(&mut atom, &mut tokens);
                tokens.push(Token::RParen);
            }
            c if c.is_whitespace() => flush(&mut atom, &mut tokens),
            c => atom.push(c),
        }
    }
    flush(&mut atom, &mut tokens);
    Ok(tokens)
}

fn parse_term(tokens: &[Token], pos: &mut usize) -> TermResult<Term> {
    match tokens.get(*pos) {
        None => Err(TermError::EmptyInput),
        Some(Token::RParen) => Err(TermError::UnmatchedCloseParen),
        Some(Token::Atom(name)) => {
            *pos += 1;
            Ok(atom_to_term(name))
        }
        Some(Token::LParen) => {
            *pos += 1;
            let mut items = Vec::new();
            loop {
                match tokens.get(*pos) {
                    None => return Err(TermError::UnbalancedParens),
                    Some(Token::RParen) => {
                        *pos += 1;
                        break;
                    }
                    _ => items.push(parse_term(tokens, pos)?),
                }
            }
            Ok(Term::List(items))
        }
    }
}

fn atom_to_term(name: &str) -> Term {
    match name.strip_prefix('`') {
        Some(rest) => Term::Var(rest.to_string()),
        None => Term::Const(name.to_string()),
    }
}
