//! Turtle serialization of fragments.
//!
//! A fragment is a plain Turtle document holding one fact set. Anything
//! oxigraph's Turtle parser accepts, including files written by other tools,
//! loads; anything it rejects makes the whole fragment corrupt.

use crate::core::{decode_triple, encode_fact, Graph};
use crate::error::{CatalogError, Result};
use crate::vocabulary;
use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::Triple;
use std::path::Path;

const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Serialize a fact set to Turtle bytes.
pub fn serialize_fragment(graph: &Graph) -> Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle)
        .with_prefix(vocabulary::PREFIX, vocabulary::NS)?
        .with_prefix("rdfs", RDFS_NS)?
        .with_prefix("xsd", XSD_NS)?
        .for_writer(Vec::new());

    for fact in graph {
        let triple = encode_fact(fact)?;
        serializer
            .serialize_triple(&triple)
            .map_err(|e| CatalogError::io(Path::new("<fragment buffer>"), e))?;
    }

    serializer.finish().map_err(|e| CatalogError::io(Path::new("<fragment buffer>"), e))
}

/// Parse Turtle bytes read from `path` into a fact set.
///
/// Blank node labels are prefixed with `blank_scope`.
pub fn parse_fragment(bytes: &[u8], path: &Path, blank_scope: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(bytes) {
        let quad = quad.map_err(|e| CatalogError::corrupt(path, e.to_string()))?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        let fact = decode_triple(triple, Some(blank_scope))
            .map_err(|reason| CatalogError::corrupt(path, reason))?;
        graph.insert(fact);
    }

    Ok(graph)
}

/// Derives a blank node scope from a fragment file name.
///
/// The scope always starts with `f_`, so labels built from it are valid
/// blank node ids whatever the file stem starts with.
pub fn blank_scope_for(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("fragment");
    let scope: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("f_{}", scope)
}
