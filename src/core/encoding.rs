//! Conversion between catalog facts and oxigraph triples

use crate::core::{Fact, Literal, Node, Term};
use crate::error::{CatalogError, Result};
use oxigraph::model::vocab::rdf;
use oxigraph::model::{
    BlankNode, Literal as OxLiteral, NamedNode, Term as OxTerm, Triple,
};

/// Encode a fact into an oxigraph triple, validating every IRI on the way.
pub fn encode_fact(fact: &Fact) -> Result<Triple> {
    let predicate = NamedNode::new(fact.predicate.as_str())?;
    let object = encode_term(&fact.object)?;

    let triple = match &fact.subject {
        Node::Iri(iri) => Triple::new(NamedNode::new(iri.as_str())?, predicate, object),
        Node::Blank(label) => Triple::new(BlankNode::new(label.as_str())?, predicate, object),
    };
    Ok(triple)
}

fn encode_term(term: &Term) -> Result<OxTerm> {
    Ok(match term {
        Term::Node(Node::Iri(iri)) => NamedNode::new(iri.as_str())?.into(),
        Term::Node(Node::Blank(label)) => BlankNode::new(label.as_str())?.into(),
        Term::Literal(literal) => encode_literal(literal)?.into(),
    })
}

/// Language tags must come with `rdf:langString` and be lowercase, and
/// `rdf:langString` must carry a tag; anything else would not read back as
/// the same literal.
fn encode_literal(literal: &Literal) -> Result<OxLiteral> {
    let lang_string = literal.datatype == rdf::LANG_STRING.as_str();
    match &literal.language {
        Some(lang) if !lang_string => Err(CatalogError::InvalidArgument(format!(
            "literal {:?} has language tag {:?} but datatype <{}>",
            literal.lexical, lang, literal.datatype
        ))),
        Some(lang) if *lang != lang.to_ascii_lowercase() => Err(CatalogError::InvalidArgument(format!(
            "language tag {:?} must be lowercase",
            lang
        ))),
        Some(lang) => OxLiteral::new_language_tagged_literal(literal.lexical.as_str(), lang.as_str())
            .map_err(|e| CatalogError::InvalidArgument(e.to_string())),
        None if lang_string => Err(CatalogError::InvalidArgument(format!(
            "literal {:?} is rdf:langString without a language tag",
            literal.lexical
        ))),
        None => Ok(OxLiteral::new_typed_literal(
            literal.lexical.as_str(),
            NamedNode::new(literal.datatype.as_str())?,
        )),
    }
}

/// Decode an oxigraph triple into a fact.
///
/// Blank node labels are prefixed with `blank_scope` when one is given, so
/// labels coming from different fragments stay distinct after merging.
/// Returns a plain message on failure; the caller knows which file it came from.
pub fn decode_triple(triple: Triple, blank_scope: Option<&str>) -> std::result::Result<Fact, String> {
    let subject = match decode_term(OxTerm::from(triple.subject), blank_scope)? {
        Term::Node(node) => node,
        Term::Literal(literal) => return Err(format!("literal in subject position: {}", literal)),
    };
    let object = decode_term(triple.object, blank_scope)?;

    Ok(Fact { subject, predicate: triple.predicate.into_string(), object })
}

fn decode_term(term: OxTerm, blank_scope: Option<&str>) -> std::result::Result<Term, String> {
    match term {
        OxTerm::NamedNode(node) => Ok(Term::Node(Node::Iri(node.into_string()))),
        OxTerm::BlankNode(node) => {
            let label = match blank_scope {
                Some(scope) => format!("{}-{}", scope, node.as_str()),
                None => node.as_str().to_string(),
            };
            Ok(Term::Node(Node::Blank(label)))
        }
        OxTerm::Literal(literal) => Ok(Term::Literal(Literal {
            lexical: literal.value().to_string(),
            datatype: literal.datatype().as_str().to_string(),
            language: literal.language().map(str::to_ascii_lowercase),
        })),
        #[allow(unreachable_patterns)]
        other => Err(format!("unsupported term: {}", other)),
    }
}
