//! The DS resolution core: a growing set of known rules plus the
//! depth-1 resolution step that derives new ones.

use entail_term::{fresh_scope, ground, match_term, Rule, Term};
use std::collections::HashSet;

use crate::error::DsResult;

/// Holds every rule DS has ever seen, plus a record of every rule
/// it has ever yielded so a later `execute` doesn't re-derive (and
/// re-hand to the caller) the same resolution twice in one process
/// lifetime. The store's own uniqueness constraint would catch the
/// duplicate anyway, but skipping it here avoids redundant work on
/// every later tick.
pub struct Search {
    rules: Vec<Rule>,
    known: HashSet<String>,
    yielded: HashSet<String>,
}

impl Search {
    pub fn new() -> Search {
        Search {
            rules: Vec::new(),
            known: HashSet::new(),
            yielded: HashSet::new(),
        }
    }

    /// Register a rule from its canonical text. Idempotent: a rule
    /// already known is a no-op.
    pub fn add(&mut self, rule_data: &str) -> DsResult<()> {
        if self.known.contains(rule_data) {
            return Ok(());
        }
        let rule = Rule::parse_canonical(rule_data)?;
        self.known.insert(rule_data.to_string());
        self.rules.push(rule);
        Ok(())
    }

    /// Enumerate every not-yet-yielded one-step consequence of the
    /// current rule set, invoking `handler` for each. Stops early if
    /// `handler` returns `true`. Returns the number of rules yielded.
    ///
    /// For every rule `A = p1..pk => c` with `k >= 1` and every fact
    /// rule `B = => f`, if `p1` matches `f` the rest of `A`'s premises
    /// and its conclusion are grounded under that match and yielded
    /// as a new rule. A single fresh scope covers the whole grounding
    /// so `A`'s free variables can't collide with anything else.
    pub fn execute(&mut self, mut handler: impl FnMut(&Rule) -> bool) -> usize {
        let mut count = 0;
        'outer: for a in &self.rules {
            let p1 = match a.first_premise() {
                Some(p) => p,
                None => continue,
            };
            for b in &self.rules {
                if !b.is_fact() {
                    continue;
                }
                let f = b.conclusion();
                let sigma = match match_term(p1, f) {
                    Some(s) => s,
                    None => continue,
                };

                let scope = fresh_scope();
                let new_premises: Vec<Term> = a
                    .rest_premises()
                    .iter()
                    .map(|p| ground(p, &sigma, &scope))
                    .collect();
                let new_conclusion = ground(a.conclusion(), &sigma, &scope);
                let new_rule = Rule::new(new_premises, new_conclusion);
                let canonical = new_rule.to_canonical();

                if self.yielded.contains(&canonical) {
                    continue;
                }
                self.yielded.insert(canonical);
                count += 1;
                if handler(&new_rule) {
                    break 'outer;
                }
            }
        }
        count
    }
}

impl Default for Search {
    fn default() -> Self {
        Search::new()
    }
}
