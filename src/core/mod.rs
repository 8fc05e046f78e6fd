//! Core data structures for the catalog graph

use oxigraph::model::vocab::{rdf, xsd};
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Subject position of a fact: a named resource or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Node {
    Iri(String),
    Blank(String),
}

impl Node {
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            Node::Blank(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{}>", iri),
            Node::Blank(label) => write!(f, "_:{}", label),
        }
    }
}

/// A typed literal. Plain strings carry `xsd:string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: String,
    pub language: Option<String>,
}

impl Literal {
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self { lexical: lexical.into(), datatype: datatype.into(), language: None }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::typed(value, xsd::STRING.as_str())
    }

    /// Counter value, typed `xsd:integer` so it survives SPARQL evaluation unchanged.
    pub fn integer(value: u64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER.as_str())
    }

    /// Language-tagged string; the datatype is always `rdf:langString` and
    /// the tag is stored lowercase, the form it is read back in.
    pub fn lang_string(lexical: impl Into<String>, language: &str) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: rdf::LANG_STRING.as_str().to_string(),
            language: Some(language.to_ascii_lowercase()),
        }
    }

    pub fn double(value: f64) -> Self {
        Self::typed(value.to_string(), xsd::DOUBLE.as_str())
    }

    /// Integer value of the literal, if its lexical form is an unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.lexical.trim().parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.lexical.trim().parse().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{:?}@{}", self.lexical, lang),
            None => write!(f, "{:?}^^<{}>", self.lexical, self.datatype),
        }
    }
}

/// Object position of a fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Node(Node),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Node(Node::Iri(iri.into()))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            Term::Node(_) => None,
        }
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Term::Node(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Node(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

/// An immutable subject-predicate-object statement. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fact {
    pub subject: Node,
    pub predicate: String,
    pub object: Term,
}

impl Fact {
    pub fn new(subject: Node, predicate: impl Into<String>, object: impl Into<Term>) -> Self {
        Self { subject, predicate: predicate.into(), object: object.into() }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// A set of facts. Duplicates collapse on insert; iteration order is the
/// fact ordering, so two graphs with the same facts iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    facts: BTreeSet<Fact>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the fact was not already present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// Merges `other` into this graph and returns how many facts were new.
    pub fn union(&mut self, other: Graph) -> usize {
        let before = self.facts.len();
        self.facts.extend(other.facts);
        self.facts.len() - before
    }
}

impl FromIterator<Fact> for Graph {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self { facts: iter.into_iter().collect() }
    }
}

impl Extend<Fact> for Graph {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        self.facts.extend(iter);
    }
}

impl IntoIterator for Graph {
    type Item = Fact;
    type IntoIter = btree_set::IntoIter<Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Fact;
    type IntoIter = btree_set::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

pub mod encoding;
pub use encoding::*;
