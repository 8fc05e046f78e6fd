//! SPARQL SELECT evaluation over a closure, backed by an in-memory oxigraph store.
//!
//! ```ignore
//! use bagcat::querying::sparql::SparqlAdapter;
//!
//! let rows = SparqlAdapter::new().select(
//!     &closure,
//!     "PREFIX bagcat: <http://www.w3.org/ns/bagcat#>
//!      SELECT ?topic ?count WHERE { ?topic bagcat:nrOfMessages ?count }",
//! )?;
//! for row in rows {
//!     println!("{} -> {}", row["topic"], row["count"]);
//! }
//! ```

use crate::core::encoding::encode_fact;
use crate::error::{CatalogError, Result};
use crate::reasoning::Closure;
use oxigraph::model::{GraphName, Quad};
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SparqlAdapter {}

impl SparqlAdapter {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs a SELECT query and returns one map per solution, keyed by
    /// variable name. Values are in N-Triples form (`<iri>`, `"120"^^<...#integer>`).
    /// ASK and CONSTRUCT queries yield no rows.
    pub fn select(&self, closure: &Closure, query: &str) -> Result<Vec<HashMap<String, String>>> {
        let store = Store::new()?;
        for fact in closure.graph() {
            let triple = encode_fact(fact)?;
            store.insert(&Quad::new(triple.subject, triple.predicate, triple.object, GraphName::DefaultGraph))?;
        }
        debug!(facts = closure.len(), query, "evaluating SPARQL query");

        let evaluator = SparqlEvaluator::new();
        let parsed = evaluator.parse_query(query).map_err(|e| CatalogError::Query(e.to_string()))?;
        let results = parsed.on_store(&store).execute()?;

        let mut rows = Vec::new();
        if let QueryResults::Solutions(solutions) = results {
            for solution in solutions {
                let solution = solution?;
                let row = solution
                    .iter()
                    .map(|(var, term)| (var.as_str().to_string(), term.to_string()))
                    .collect();
                rows.push(row);
            }
        }
        Ok(rows)
    }
}
