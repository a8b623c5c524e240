//! The EGG state: the e-graph plus the derived `terms`/`facts`/`pairs`
//! bookkeeping sets, and the equality/idea discharge operation.

use std::collections::HashSet;

use entail_term::{fresh_scope, ground, match_term, Rule, Term};

use crate::egraph::EGraph;

pub struct Egg {
    graph: EGraph,
    /// Every term that has appeared on either side of an equality, or
    /// as any 0-premise fact.
    terms: HashSet<Term>,
    /// Terms appearing as non-equality 0-premise facts.
    facts: HashSet<Term>,
    /// Synthesized `(binary == lhs rhs)` terms for every pair of
    /// `terms` congruent as of the last rebuild.
    pairs: HashSet<Term>,
}

impl Egg {
    pub fn new() -> Egg {
        Egg {
            graph: EGraph::new(),
            terms: HashSet::new(),
            facts: HashSet::new(),
            pairs: HashSet::new(),
        }
    }

    /// Register a rule. Non-fact rules (`k >= 1` premises) are
    /// ignored — EGG only ever reasons over asserted 0-premise facts.
    pub fn add(&mut self, rule: &Rule) {
        if !rule.is_fact() {
            return;
        }
        if let Some((lhs, rhs)) = rule.equality_parts() {
            self.terms.insert(lhs.clone());
            self.terms.insert(rhs.clone());
            let l = self.graph.add(lhs);
            let r = self.graph.add(rhs);
            self.graph.merge(l, r);
        } else {
            let f = rule.conclusion().clone();
            self.terms.insert(f.clone());
            self.facts.insert(f);
        }
    }

    /// Restore congruence closure and regenerate `pairs`.
    pub fn rebuild(&mut self) {
        self.graph.rebuild();
        self.pairs.clear();
        let terms: Vec<Term> = self.terms.iter().cloned().collect();
        for l in &terms {
            for r in &terms {
                if l == r {
                    continue;
                }
                let lc = self.graph.add(l);
                let rc = self.graph.add(r);
                if self.graph.find(lc) == self.graph.find(rc) {
                    self.pairs.insert(Term::binary_eq(l.clone(), r.clone()));
                }
            }
        }
    }

    /// Discharge a 0-premise goal rule against the current e-graph,
    /// returning every rule the goal's conclusion yields. The caller
    /// considers the goal discharged if any yielded rule equals the
    /// goal itself.
    pub fn execute(&mut self, goal: &Rule) -> Vec<Rule> {
        let g = goal.conclusion();
        match g.as_binary_eq() {
            Some((lhs, rhs)) => self.discharge_equality(goal, lhs, rhs),
            None => self.discharge_non_equality(goal, g),
        }
    }

    fn discharge_equality(&mut self, goal: &Rule, lhs: &Term, rhs: &Term) -> Vec<Rule> {
        let mut yielded = Vec::new();

        let lc = self.graph.add(lhs);
        let rc = self.graph.add(rhs);
        if self.graph.find(lc) == self.graph.find(rc) {
            yielded.push(goal.clone());
        }

        let g = goal.conclusion();
        for t in &self.pairs {
            if let Some(sigma) = match_term(t, g) {
                let scope = fresh_scope();
                yielded.push(Rule::fact(ground(t, &sigma, &scope)));
            }
        }
        yielded
    }

    fn discharge_non_equality(&mut self, goal: &Rule, g: &Term) -> Vec<Rule> {
        let mut yielded = Vec::new();
        let gc = self.graph.add(g);

        let facts: Vec<Term> = self.facts.iter().cloned().collect();
        for f in &facts {
            let fc = self.graph.add(f);
            if self.graph.find(gc) == self.graph.find(fc) {
                yielded.push(goal.clone());
                break;
            }
        }

        for f in &facts {
            let probe = Term::binary_eq(g.clone(), f.clone());
            for t in &self.pairs {
                if let Some(sigma) = match_term(t, &probe) {
                    let scope = fresh_scope();
                    let result = ground(t, &sigma, &scope);
                    if let Some((_, witness)) = result.as_binary_eq() {
                        yielded.push(Rule::fact(witness.clone()));
                    }
                }
            }
        }
        yielded
    }
}

impl Default for Egg {
    fn default() -> Self {
        Egg::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(conclusion: &str) -> Rule {
        Rule::parse_canonical(&format!("----\n{}\n", conclusion)).unwrap()
    }

    #[test]
    fn equality_symmetry() {
        let mut egg = Egg::new();
        egg.add(&fact("(binary == a b)"));
        egg.rebuild();

        let goal = fact("(binary == b a)");
        let yielded = egg.execute(&goal);
        assert!(yielded.iter().any(|r| r.to_canonical() == "----\n(binary == b a)\n"));
    }

    #[test]
    fn transitivity() {
        let mut egg = Egg::new();
        egg.add(&fact("(binary == a b)"));
        egg.add(&fact("(binary == b c)"));
        egg.rebuild();

        let goal = fact("(binary == a c)");
        let yielded = egg.execute(&goal);
        assert!(yielded.iter().any(|r| r.to_canonical() == "----\n(binary == a c)\n"));
    }

    #[test]
    fn congruence_on_equal_arguments() {
        let mut egg = Egg::new();
        egg.add(&fact("(binary == x y)"));
        egg.rebuild();

        let goal = fact("(binary == (unary f x) (unary f y))");
        let yielded = egg.execute(&goal);
        assert!(yielded
            .iter()
            .any(|r| r.to_canonical() == "----\n(binary == (unary f x) (unary f y))\n"));
    }

    #[test]
    fn pattern_variable_equality() {
        let mut egg = Egg::new();
        egg.add(&fact("(binary == (unary a `x) (unary b `x))"));
        egg.rebuild();

        let goal = fact("(binary == (unary b t) (unary a t))");
        let yielded = egg.execute(&goal);
        assert!(yielded
            .iter()
            .any(|r| r.to_canonical() == "----\n(binary == (unary b t) (unary a t))\n"));
    }

    #[test]
    fn substitution_via_congruence_on_non_equality_goal() {
        let mut egg = Egg::new();
        egg.add(&fact("(unary f x)"));
        egg.add(&fact("(binary == x y)"));
        egg.rebuild();

        let goal = fact("(unary f y)");
        let yielded = egg.execute(&goal);
        assert!(yielded.iter().any(|r| r.to_canonical() == "----\n(unary f y)\n"));
    }
}
