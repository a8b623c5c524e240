//! Surface syntax: `premise1, premise2 => conclusion` (and
//! `=> conclusion` for a zero-premise rule), converted to and from
//! the canonical newline/`----`-delimited form the engines store.
//! Used only at the input/output task boundary — the engines and the
//! store only ever see canonical text.

use std::fmt;

use entail_term::{Rule, Term, TermError};

#[derive(Debug)]
pub enum PrettyError {
    MissingArrow,
    Term(TermError),
}

impl fmt::Display for PrettyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrettyError::MissingArrow => write!(f, "missing '=>' in rule"),
            PrettyError::Term(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PrettyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrettyError::Term(e) => Some(e),
            PrettyError::MissingArrow => None,
        }
    }
}

impl From<TermError> for PrettyError {
    fn from(e: TermError) -> Self {
        PrettyError::Term(e)
    }
}

/// Parse `premise1, premise2 => conclusion` into a [`Rule`].
pub fn parse_surface(line: &str) -> Result<Rule, PrettyError> {
    let (premises_part, conclusion_part) =
        line.split_once("=>").ok_or(PrettyError::MissingArrow)?;

    let premises_part = premises_part.trim();
    let premises = if premises_part.is_empty() {
        Vec::new()
    } else {
        premises_part
            .split(',')
            .map(|p| Term::parse(p.trim()))
            .collect::<Result<Vec<Term>, TermError>>()?
    };

    let conclusion = Term::parse(conclusion_part.trim())?;
    Ok(Rule::new(premises, conclusion))
}

/// Render a [`Rule`] as `premise1, premise2 => conclusion`.
pub fn to_surface(rule: &Rule) -> String {
    let premises: Vec<String> = rule.premises().iter().map(|p| p.to_string()).collect();
    if premises.is_empty() {
        format!("=> {}", rule.conclusion())
    } else {
        format!("{} => {}", premises.join(", "), rule.conclusion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fact_rule() {
        let rule = parse_surface("=> a").unwrap();
        assert!(rule.is_fact());
        assert_eq!(rule.conclusion(), &Term::Const("a".into()));
    }

    #[test]
    fn parses_multi_premise_rule() {
        let rule = parse_surface("a, b => c").unwrap();
        assert_eq!(rule.premises().len(), 2);
    }

    #[test]
    fn round_trips_through_surface_form() {
        let rule = Rule::parse_canonical("a\nb\n----\nc\n").unwrap();
        let surface = to_surface(&rule);
        assert_eq!(surface, "a, b => c");
        let reparsed = parse_surface(&surface).unwrap();
        assert_eq!(reparsed, rule);
    }

    #[test]
    fn rejects_missing_arrow() {
        assert!(matches!(parse_surface("a b c"), Err(PrettyError::MissingArrow)));
    }
}
