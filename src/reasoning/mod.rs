//! Schema-level inference over the merged catalog graph.

pub mod entailment;
pub mod schema;

pub use entailment::{entail, Closure};
pub use schema::Schema;
