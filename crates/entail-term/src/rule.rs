//! The rule model: premises plus a conclusion, and its canonical
//! serialized form.
//!
//! ```text
//! <premise_1>
//! …
//! <premise_k>
//! ----
//! <conclusion>
//! ```
//!
//! A rule with zero premises is a *fact rule*; its serialization
//! begins with `----` on the first line. This parser is
//! line-structured rather than the string-prefix sniffing
//! (`data.startswith("----\n(binary == ")`) the original prototype
//! used — it distinguishes "first line is `----`" from "the
//! conclusion happens to begin with a parenthesized `binary ==` list"
//! structurally instead of textually.

use crate::error::{TermError, TermResult};
use crate::term::Term;
use std::fmt;

/// A rule: zero or more premises, and one conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    premises: Vec<Term>,
    conclusion: Term,
}

impl Rule {
    /// Build a rule directly from its parts.
    pub fn new(premises: Vec<Term>, conclusion: Term) -> Rule {
        Rule {
            premises,
            conclusion,
        }
    }

    /// Build a zero-premise fact rule.
    pub fn fact(conclusion: Term) -> Rule {
        Rule {
            premises: Vec::new(),
            conclusion,
        }
    }

    /// Parse a rule from its canonical `premises\n----\nconclusion\n` form.
    pub fn parse_canonical(data: &str) -> TermResult<Rule> {
        if !data.ends_with('\n') {
            return Err(TermError::MissingTrailingNewline);
        }
        let body = &data[..data.len() - 1];
        let mut lines = body.split('\n');

        let mut premises = Vec::new();
        let mut found_separator = false;
        for line in &mut lines {
            if line == "----" {
                found_separator = true;
                break;
            }
            premises.push(Term::parse(line)?);
        }
        if !found_separator {
            return Err(TermError::MissingSeparator);
        }

        let mut conclusion_line = None;
        for line in lines {
            if conclusion_line.is_some() {
                return Err(TermError::MultipleConclusionLines);
            }
            conclusion_line = Some(line);
        }
        let conclusion_line = conclusion_line.ok_or(TermError::MissingConclusion)?;
        let conclusion = Term::parse(conclusion_line)?;

        Ok(Rule {
            premises,
            conclusion,
        })
    }

    /// Render this rule to its canonical serialized form.
    pub fn to_canonical(&self) -> String {
        self.to_string()
    }

    /// The premise list.
    pub fn premises(&self) -> &[Term] {
        &self.premises
    }

    /// The conclusion term.
    pub fn conclusion(&self) -> &Term {
        &self.conclusion
    }

    /// The first premise, if any.
    pub fn first_premise(&self) -> Option<&Term> {
        self.premises.first()
    }

    /// Premises after the first, for resolving against this rule's
    /// first premise.
    pub fn rest_premises(&self) -> &[Term] {
        if self.premises.is_empty() {
            &[]
        } else {
            &self.premises[1..]
        }
    }

    /// A fact rule has no premises.
    pub fn is_fact(&self) -> bool {
        self.premises.is_empty()
    }

    /// An equality rule's conclusion is `(binary == lhs rhs)`.
    pub fn is_equality(&self) -> bool {
        self.conclusion.as_binary_eq().is_some()
    }

    /// A ground equality fact is a 0-premise equality rule.
    pub fn is_ground_equality_fact(&self) -> bool {
        self.is_fact() && self.is_equality()
    }

    /// The `(lhs, rhs)` pair of an equality rule's conclusion.
    pub fn equality_parts(&self) -> Option<(&Term, &Term)> {
        self.conclusion.as_binary_eq()
    }

    /// The idea derived from this rule: a 0-premise rule whose
    /// conclusion is this rule's first premise. `None` for fact rules
    /// (`k == 0`), which derive no idea.
    pub fn idea(&self) -> Option<Rule> {
        self.first_premise()
            .map(|p1| Rule::fact(p1.clone()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for premise in &self.premises {
            writeln!(f, "{}", premise)?;
        }
        writeln!(f, "----")?;
        writeln!(f, "{}", self.conclusion)
    }
}
