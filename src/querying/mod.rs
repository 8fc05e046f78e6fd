pub mod pattern;
pub mod sparql;

pub use pattern::{query, Binding, Matches, TriplePattern};
pub use sparql::SparqlAdapter;
