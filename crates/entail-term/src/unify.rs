//! First-order matching and grounding.
//!
//! `match_term` is one-directional: it matches a pattern (which may
//! contain variables) against a target (usually, but not necessarily,
//! ground) and produces the most general substitution. `ground`
//! applies a substitution to a template, renaming any variable the
//! substitution doesn't bind into a fresh scope so that grounding one
//! rule into another can never accidentally capture a variable that
//! belongs to the other.

use crate::term::Term;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A variable binding produced by [`match_term`].
pub type Substitution = HashMap<String, Term>;

/// Match `pattern` against `target`, returning the most general
/// substitution on success.
///
/// Constants must match identically; variables bind to whatever
/// they're matched against, consistently across the whole pattern —
/// a variable that's bound twice must bind to the same term both
/// times, or matching fails.
pub fn match_term(pattern: &Term, target: &Term) -> Option<Substitution> {
    let mut subst = Substitution::new();
    if unify_into(pattern, target, &mut subst) {
        Some(subst)
    } else {
        None
    }
}

fn unify_into(pattern: &Term, target: &Term, subst: &mut Substitution) -> bool {
    match pattern {
        Term::Var(name) => match subst.get(name) {
            Some(bound) => bound == target,
            None => {
                subst.insert(name.clone(), target.clone());
                true
            }
        },
        Term::Const(c) => matches!(target, Term::Const(c2) if c2 == c),
        Term::List(ps) => match target {
            Term::List(ts) if ps.len() == ts.len() => {
                ps.iter().zip(ts).all(|(p, t)| unify_into(p, t, subst))
            }
            _ => false,
        },
    }
}

static SCOPE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Allocate a fresh scope identifier.
///
/// Each call to [`ground`] should use a scope distinct from every
/// other in-flight grounding, so that free variables introduced by
/// two different resolution steps can never collide even if they
/// share a name in their respective source rules.
pub fn fresh_scope() -> String {
    format!("s{}", SCOPE_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Substitute bound variables of `template` everywhere they occur.
/// Variables the substitution doesn't bind are renamed into `scope`
/// rather than left as-is, preventing capture when the grounded term
/// is later combined with another rule's variables of the same name.
pub fn ground(template: &Term, subst: &Substitution, scope: &str) -> Term {
    match template {
        Term::Var(name) => match subst.get(name) {
            Some(bound) => bound.clone(),
            None => Term::Var(format!("{}#{}", name, scope)),
        },
        Term::Const(c) => Term::Const(c.clone()),
        Term::List(items) => Term::List(
            items
                .iter()
                .map(|item| ground(item, subst, scope))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    #[test]
    fn matches_constant_against_itself() {
        let a = Term::parse("a").unwrap();
        assert!(match_term(&a, &a).is_some());
    }

    #[test]
    fn fails_on_mismatched_constants() {
        let a = Term::parse("a").unwrap();
        let b = Term::parse("b").unwrap();
        assert!(match_term(&a, &b).is_none());
    }

    #[test]
    fn binds_variable_to_target() {
        let pattern = Term::parse("`x").unwrap();
        let target = Term::parse("(unary f a)").unwrap();
        let subst = match_term(&pattern, &target).unwrap();
        assert_eq!(subst.get("x"), Some(&target));
    }

    #[test]
    fn requires_consistent_repeated_variable_binding() {
        let pattern = Term::parse("(pair `x `x)").unwrap();
        assert!(match_term(&pattern, &Term::parse("(pair a a)").unwrap()).is_some());
        assert!(match_term(&pattern, &Term::parse("(pair a b)").unwrap()).is_none());
    }

    #[test]
    fn fails_on_arity_mismatch() {
        let pattern = Term::parse("(unary f `x)").unwrap();
        let target = Term::parse("(unary f a b)").unwrap();
        assert!(match_term(&pattern, &target).is_none());
    }

    #[test]
    fn ground_substitutes_bound_variables() {
        let mut subst = Substitution::new();
        subst.insert("x".to_string(), Term::Const("a".into()));
        let template = Term::parse("(unary f `x)").unwrap();
        let grounded = ground(&template, &subst, "1");
        assert_eq!(grounded, Term::parse("(unary f a)").unwrap());
    }

    #[test]
    fn ground_renames_unbound_variables_into_scope() {
        let subst = Substitution::new();
        let template = Term::parse("`y").unwrap();
        let grounded = ground(&template, &subst, "7");
        assert_eq!(grounded, Term::Var("y#7".into()));
    }

    #[test]
    fn fresh_scope_is_distinct_across_calls() {
        let a = fresh_scope();
        let b = fresh_scope();
        assert_ne!(a, b);
    }
}
