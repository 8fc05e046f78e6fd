//! RDFS entailment by naive fixpoint iteration.
//!
//! Rules applied each round:
//!
//! | rule   | if                                   | then                  |
//! |--------|--------------------------------------|-----------------------|
//! | rdfs2  | `p domain c`, `s p o`                | `s type c`            |
//! | rdfs3  | `p range c`, `s p o`, `o` a node     | `o type c`            |
//! | rdfs5  | `p subPropertyOf q`, `q subPropertyOf r` | `p subPropertyOf r` |
//! | rdfs7  | `p subPropertyOf q`, `s p o`         | `s q o`               |
//! | rdfs9  | `c subClassOf d`, `s type c`         | `s type d`            |
//! | rdfs11 | `c subClassOf d`, `d subClassOf e`   | `c subClassOf e`      |
//!
//! Rounds repeat until one adds nothing. Every derived fact is built from
//! nodes and predicates already in the graph, so the closure is finite and
//! the loop terminates even for cyclic hierarchies.

use crate::core::{Fact, Graph, Node, Term};
use crate::querying::pattern::{Matches, TriplePattern};
use crate::reasoning::schema::Schema;
use oxigraph::model::vocab::{rdf, rdfs};
use std::collections::BTreeMap;
use tracing::debug;

/// A graph closed under the entailment rules. Fully materialized, so
/// queries over it are restartable and repeatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    graph: Graph,
    asserted: usize,
}

impl Closure {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.graph.contains(fact)
    }

    /// Facts present in the closure that were neither asserted nor schema axioms.
    pub fn inferred_count(&self) -> usize {
        self.graph.len() - self.asserted
    }

    pub fn query(&self, pattern: &TriplePattern) -> Matches<'_> {
        Matches::new(self.graph.iter(), pattern.clone())
    }
}

/// Axiom lookups rebuilt from the current graph at the start of every round,
/// so axioms derived in one round feed the next.
#[derive(Default)]
struct Axioms {
    super_classes: BTreeMap<Node, Vec<Node>>,
    super_properties: BTreeMap<String, Vec<String>>,
    domains: BTreeMap<String, Vec<Node>>,
    ranges: BTreeMap<String, Vec<Node>>,
}

impl Axioms {
    fn collect(graph: &Graph) -> Self {
        let mut axioms = Axioms::default();
        for fact in graph {
            let Term::Node(object) = &fact.object else {
                continue;
            };
            let predicate = fact.predicate.as_str();
            if predicate == rdfs::SUB_CLASS_OF.as_str() {
                axioms.super_classes.entry(fact.subject.clone()).or_default().push(object.clone());
                continue;
            }
            let Some(property) = fact.subject.as_iri() else {
                continue;
            };
            if predicate == rdfs::SUB_PROPERTY_OF.as_str() {
                if let Some(sup) = object.as_iri() {
                    axioms.super_properties.entry(property.to_string()).or_default().push(sup.to_string());
                }
            } else if predicate == rdfs::DOMAIN.as_str() {
                axioms.domains.entry(property.to_string()).or_default().push(object.clone());
            } else if predicate == rdfs::RANGE.as_str() {
                axioms.ranges.entry(property.to_string()).or_default().push(object.clone());
            }
        }
        axioms
    }

    fn is_empty(&self) -> bool {
        self.super_classes.is_empty()
            && self.super_properties.is_empty()
            && self.domains.is_empty()
            && self.ranges.is_empty()
    }

    fn derive(&self, fact: &Fact, out: &mut Vec<Fact>) {
        let predicate = fact.predicate.as_str();
        let object_node = fact.object.as_node();

        if predicate == rdf::TYPE.as_str() {
            // rdfs9
            if let Some(class) = object_node {
                for sup in self.super_classes.get(class).into_iter().flatten() {
                    out.push(Fact::new(fact.subject.clone(), predicate, sup.clone()));
                }
            }
        } else if predicate == rdfs::SUB_CLASS_OF.as_str() {
            // rdfs11
            if let Some(class) = object_node {
                for sup in self.super_classes.get(class).into_iter().flatten() {
                    out.push(Fact::new(fact.subject.clone(), predicate, sup.clone()));
                }
            }
        } else if predicate == rdfs::SUB_PROPERTY_OF.as_str() {
            // rdfs5
            if let Some(property) = object_node.and_then(Node::as_iri) {
                for sup in self.super_properties.get(property).into_iter().flatten() {
                    out.push(Fact::new(fact.subject.clone(), predicate, Term::iri(sup.as_str())));
                }
            }
        }

        // rdfs7
        for sup in self.super_properties.get(predicate).into_iter().flatten() {
            out.push(Fact::new(fact.subject.clone(), sup.as_str(), fact.object.clone()));
        }
        // rdfs2
        for class in self.domains.get(predicate).into_iter().flatten() {
            out.push(Fact::new(fact.subject.clone(), rdf::TYPE.as_str(), class.clone()));
        }
        // rdfs3
        if let Some(node) = object_node {
            for class in self.ranges.get(predicate).into_iter().flatten() {
                out.push(Fact::new(node.clone(), rdf::TYPE.as_str(), class.clone()));
            }
        }
    }
}

/// Computes the closure of `graph` plus the axioms of `schema`.
pub fn entail(graph: &Graph, schema: &Schema) -> Closure {
    let mut closure = graph.clone();
    closure.extend(schema.axioms().iter().cloned());
    let asserted = closure.len();

    let mut round = 0usize;
    loop {
        round += 1;
        let axioms = Axioms::collect(&closure);
        if axioms.is_empty() {
            debug!(round, "no axioms, closure is the asserted graph");
            break;
        }

        let mut derived = Vec::new();
        for fact in &closure {
            axioms.derive(fact, &mut derived);
        }
        let mut added = 0usize;
        for fact in derived {
            if closure.insert(fact) {
                added += 1;
            }
        }
        debug!(round, added, total = closure.len(), "entailment round");
        if added == 0 {
            break;
        }
    }

    Closure { graph: closure, asserted }
}
