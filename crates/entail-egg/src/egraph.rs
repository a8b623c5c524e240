//! Hash-consed e-graph over terms, with congruence closure restored
//! by [`EGraph::rebuild`].
//!
//! Unlike a term-rewriting e-graph over ground terms only, nodes here
//! may contain pattern-variable leaves (a fact like
//! `(unary a \`x)` is a perfectly good e-node whose leaf happens to be
//! a variable atom rather than a constant) — the e-graph itself is
//! blind to that distinction and treats every atom by its printed
//! form. Pattern-aware reasoning happens one layer up, in the
//! discharge step, via `match_term` against synthesized pairs.

use entail_term::Term;
use std::collections::HashMap;

use crate::union_find::UnionFind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ENode {
    Atom(String),
    List(Vec<usize>),
}

pub struct EGraph {
    uf: UnionFind,
    nodes: Vec<ENode>,
    node_class: Vec<usize>,
    hashcons: HashMap<ENode, usize>,
    term_of: HashMap<Term, usize>,
}

impl EGraph {
    pub fn new() -> EGraph {
        EGraph {
            uf: UnionFind::new(),
            nodes: Vec::new(),
            node_class: Vec::new(),
            hashcons: HashMap::new(),
            term_of: HashMap::new(),
        }
    }

    /// Hash-cons `term` into the graph, returning its current
    /// e-class. Never merges anything by itself — a term whose shape
    /// already exists just returns the existing class.
    pub fn add(&mut self, term: &Term) -> usize {
        if let Some(&c) = self.term_of.get(term) {
            let c = self.uf.find(c);
            self.term_of.insert(term.clone(), c);
            return c;
        }

        let enode = match term {
            Term::Var(name) => ENode::Atom(format!("`{}", name)),
            Term::Const(name) => ENode::Atom(name.clone()),
            Term::List(items) => {
                let children: Vec<usize> = items.iter().map(|t| self.add(t)).collect();
                ENode::List(children)
            }
        };

        let canonical = self.canonicalize(&enode);
        if let Some(&existing) = self.hashcons.get(&canonical) {
            let c = self.uf.find(existing);
            self.term_of.insert(term.clone(), c);
            return c;
        }

        let c = self.uf.make_set();
        self.nodes.push(enode);
        self.node_class.push(c);
        self.hashcons.insert(canonical, c);
        self.term_of.insert(term.clone(), c);
        c
    }

    pub fn find(&mut self, class: usize) -> usize {
        self.uf.find(class)
    }

    /// Assert that `a` and `b` denote the same e-class.
    pub fn merge(&mut self, a: usize, b: usize) {
        self.uf.union(a, b);
    }

    fn canonicalize(&mut self, enode: &ENode) -> ENode {
        match enode {
            ENode::Atom(_) => enode.clone(),
            ENode::List(children) => {
                ENode::List(children.iter().map(|&c| self.uf.find(c)).collect())
            }
        }
    }

    /// Restore congruence: repeatedly canonicalize every node's shape
    /// under the current union-find and merge any two nodes whose
    /// canonical shapes collide, until a full pass makes no further
    /// merges.
    pub fn rebuild(&mut self) {
        loop {
            let mut changed = false;
            let mut seen: HashMap<ENode, usize> = HashMap::new();
            for i in 0..self.nodes.len() {
                let canonical = self.canonicalize(&self.nodes[i].clone());
                let leader = self.uf.find(self.node_class[i]);
                match seen.get(&canonical) {
                    Some(&existing) => {
                        let existing_leader = self.uf.find(existing);
                        if existing_leader != leader {
                            self.uf.union(existing_leader, leader);
                            changed = true;
                        }
                    }
                    None => {
                        seen.insert(canonical, leader);
                    }
                }
            }
            if !changed {
                self.hashcons = seen;
                break;
            }
        }
    }
}

impl Default for EGraph {
    fn default() -> Self {
        EGraph::new()
    }
}
