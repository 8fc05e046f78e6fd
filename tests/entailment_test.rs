mod common;

use bagcat::{
    BagCat, BagCatalog, Fact, Graph, Node, Schema, StoreConfig, Term, TriplePattern,
};
use oxigraph::model::vocab::{rdf, rdfs};

const FLEET: &str = "http://example.org/fleet#";

fn fleet(local: &str) -> String {
    format!("{}{}", FLEET, local)
}

#[test]
fn test_subclass_instance_is_instance_of_superclass() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let schema = Schema::new()
        .with_sub_class(fleet("LidarBag"), BagCat::BagFile.iri())
        .with_sub_class(BagCat::BagFile.iri(), BagCat::Dataset.iri());
    let catalog = BagCatalog::new(StoreConfig::with_directory(dir.path()), schema).unwrap();

    let run = Node::iri(fleet("run-42"));
    let facts: Graph = std::iter::once(Fact::new(
        run.clone(),
        rdf::TYPE.as_str(),
        Term::iri(fleet("LidarBag")),
    ))
    .collect();
    catalog.persist_graph(&facts).unwrap();

    let merged = catalog.snapshot().unwrap();
    for class in [BagCat::BagFile.iri(), BagCat::Dataset.iri()] {
        let instances: Vec<_> = merged
            .query(
                &TriplePattern::any()
                    .with_predicate(rdf::TYPE.as_str())
                    .with_object(Term::iri(class.clone())),
            )
            .filter_map(|b| b.subject().cloned())
            .collect();
        assert_eq!(instances, vec![run.clone()], "run-42 is a {}", class);
    }
    assert!(merged.closure.inferred_count() >= 2);
    assert_eq!(merged.asserted, facts);
}

#[test]
fn test_superclass_as_only_bound_position() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let schema = Schema::new().with_sub_class(fleet("LidarBag"), BagCat::BagFile.iri());
    let catalog = BagCatalog::new(StoreConfig::with_directory(dir.path()), schema).unwrap();

    let run = Node::iri(fleet("run-42"));
    let facts: Graph =
        std::iter::once(Fact::new(run.clone(), rdf::TYPE.as_str(), Term::iri(fleet("LidarBag")))).collect();
    catalog.persist_graph(&facts).unwrap();

    let merged = catalog.snapshot().unwrap();
    let pattern = TriplePattern::any().with_object(Term::iri(BagCat::BagFile.iri()));
    let mut pairs: Vec<_> = merged
        .query(&pattern)
        .map(|b| {
            assert_eq!(b.object(), None);
            (b.subject().cloned(), b.predicate().map(str::to_string))
        })
        .collect();
    pairs.sort();

    // the inferred type plus the subclass axiom itself
    let mut expected = vec![
        (Some(run), Some(rdf::TYPE.as_str().to_string())),
        (Some(Node::iri(fleet("LidarBag"))), Some(rdfs::SUB_CLASS_OF.as_str().to_string())),
    ];
    expected.sort();
    assert_eq!(pairs, expected);
}

#[test]
fn test_schema_persisted_in_fragments_is_honoured() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let catalog = BagCatalog::open(dir.path()).unwrap();

    let schema = Schema::new().with_sub_property(fleet("lidarMessages"), BagCat::NrOfMessages.iri());
    catalog.persist_graph(schema.axioms()).unwrap();

    let facts: Graph = std::iter::once(Fact::new(
        Node::iri(fleet("topic")),
        fleet("lidarMessages"),
        bagcat::Literal::integer(7),
    ))
    .collect();
    catalog.persist_graph(&facts).unwrap();

    let merged = catalog.snapshot().unwrap();
    let counts = merged
        .query(
            &TriplePattern::any()
                .with_subject(Node::iri(fleet("topic")))
                .with_predicate(BagCat::NrOfMessages),
        )
        .count();
    assert_eq!(counts, 1);
}

#[test]
fn test_closure_is_stable_across_snapshots() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let schema = Schema::new().with_sub_class(fleet("A"), fleet("B"));
    let catalog = BagCatalog::new(StoreConfig::with_directory(dir.path()), schema).unwrap();
    catalog
        .persist_graph(
            &std::iter::once(Fact::new(Node::iri(fleet("x")), rdf::TYPE.as_str(), Term::iri(fleet("A"))))
                .collect(),
        )
        .unwrap();

    let first = catalog.snapshot().unwrap();
    let second = catalog.snapshot().unwrap();
    assert_eq!(first.closure, second.closure);
}
