use crate::core::{Fact, Graph, Node, Term};
use oxigraph::model::vocab::rdfs;

/// Class and property axioms that entailment reasons over.
///
/// Axioms are kept as ordinary facts (`rdfs:subClassOf`, `rdfs:subPropertyOf`,
/// `rdfs:domain`, `rdfs:range`), so axioms persisted inside fragments and
/// axioms declared here are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    axioms: Graph,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog vocabulary. Its terms form a flat set: no class or property
    /// hierarchy, no domains, no ranges.
    pub fn bagcat() -> Self {
        Self::new()
    }

    pub fn with_sub_class(mut self, sub: impl Into<String>, sup: impl Into<String>) -> Self {
        self.axioms.insert(axiom(sub, rdfs::SUB_CLASS_OF.as_str(), sup));
        self
    }

    pub fn with_sub_property(mut self, sub: impl Into<String>, sup: impl Into<String>) -> Self {
        self.axioms.insert(axiom(sub, rdfs::SUB_PROPERTY_OF.as_str(), sup));
        self
    }

    pub fn with_domain(mut self, property: impl Into<String>, class: impl Into<String>) -> Self {
        self.axioms.insert(axiom(property, rdfs::DOMAIN.as_str(), class));
        self
    }

    pub fn with_range(mut self, property: impl Into<String>, class: impl Into<String>) -> Self {
        self.axioms.insert(axiom(property, rdfs::RANGE.as_str(), class));
        self
    }

    pub fn axioms(&self) -> &Graph {
        &self.axioms
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}

fn axiom(subject: impl Into<String>, predicate: &str, object: impl Into<String>) -> Fact {
    Fact::new(Node::iri(subject), predicate, Term::iri(object))
}
