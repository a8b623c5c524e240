//! Term algebra, rule model, and first-order matching/grounding.
//!
//! This crate is the shared data model between the DS and EGG
//! reasoning cores: an s-expression [`Term`] with pattern-variable
//! support, a [`Rule`] (premises + conclusion) with its canonical
//! on-disk serialization, and the [`match_term`]/[`ground`]
//! operations used to resolve rules against each other.

mod error;
mod rule;
mod term;
mod unify;

pub use error::{TermError, TermResult};
pub use rule::Rule;
pub use term::Term;
pub use unify::{fresh_scope, ground, match_term, Substitution};
