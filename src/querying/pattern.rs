//! Triple-pattern matching over a materialized closure.

use crate::core::{Fact, Node, Term};
use crate::reasoning::Closure;
use std::collections::btree_set;

/// A triple where every position is either bound to a value or a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Option<Node>,
    pub predicate: Option<String>,
    pub object: Option<Term>,
}

impl TriplePattern {
    /// Matches every fact.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: Node) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn with_object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn matches(&self, fact: &Fact) -> bool {
        self.subject.as_ref().map_or(true, |s| *s == fact.subject)
            && self.predicate.as_ref().map_or(true, |p| *p == fact.predicate)
            && self.object.as_ref().map_or(true, |o| *o == fact.object)
    }
}

/// One match. Accessors return the value bound to a wildcard position, and
/// `None` for positions the pattern fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    fact: &'a Fact,
    free: [bool; 3],
}

impl<'a> Binding<'a> {
    pub fn subject(&self) -> Option<&'a Node> {
        self.free[0].then_some(&self.fact.subject)
    }

    pub fn predicate(&self) -> Option<&'a str> {
        self.free[1].then_some(self.fact.predicate.as_str())
    }

    pub fn object(&self) -> Option<&'a Term> {
        self.free[2].then_some(&self.fact.object)
    }

    /// The whole matching fact.
    pub fn fact(&self) -> &'a Fact {
        self.fact
    }
}

/// Lazy iterator over the facts of a closure that match a pattern.
///
/// Cloning restarts nothing: the clone continues from the same position.
/// Calling `query` again yields the same sequence from the start.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    facts: btree_set::Iter<'a, Fact>,
    pattern: TriplePattern,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(facts: btree_set::Iter<'a, Fact>, pattern: TriplePattern) -> Self {
        Self { facts, pattern }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = Binding<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.pattern;
        self.facts.find(|fact| pattern.matches(fact)).map(|fact| Binding {
            fact,
            free: [pattern.subject.is_none(), pattern.predicate.is_none(), pattern.object.is_none()],
        })
    }
}

/// Every fact in `closure` matching `pattern`.
pub fn query<'a>(closure: &'a Closure, pattern: &TriplePattern) -> Matches<'a> {
    closure.query(pattern)
}
