mod common;

use bagcat::storage::{DirectoryLoader, FragmentFilter};
use bagcat::{
    load, translate_to_facts, BagCatalog, CatalogError, CatalogSource, Fact, FragmentStore, Graph,
    Literal, Node, StoreConfig, TopicInfo,
};
use std::fs;

fn fact(subject: &str, value: u64) -> Fact {
    Fact::new(
        Node::iri(format!("http://example.org/{}", subject)),
        "http://example.org/value",
        Literal::integer(value),
    )
}

#[test]
fn test_load_returns_union_of_persisted_fragments() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = FragmentStore::open(dir.path()).unwrap();

    let f1: Graph = [fact("a", 1), fact("b", 2)].into_iter().collect();
    let f2: Graph = [fact("c", 3)].into_iter().collect();
    store.persist(&f1).unwrap();
    store.persist(&f2).unwrap();

    let mut expected = f1.clone();
    expected.union(f2.clone());
    assert_eq!(load(dir.path()).unwrap(), expected);
    assert_eq!(store.load().unwrap(), expected);
}

#[test]
fn test_identical_fact_sets_collapse_on_load() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = FragmentStore::open(dir.path()).unwrap();

    let mut topic = TopicInfo::new("/gps", "std_msgs/GPSFix", "3db3d0a7bc53054c67c528af84710b70");
    topic.add_to_message_count(120).unwrap();
    let facts = translate_to_facts(&topic);

    store.persist(&facts).unwrap();
    store.persist(&facts).unwrap();

    assert_eq!(store.fragments().unwrap().len(), 2, "both fragments stay on disk");
    assert_eq!(store.load().unwrap(), facts, "merged graph holds each fact once");
}

#[test]
fn test_empty_fact_set_is_a_valid_fragment() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = FragmentStore::open(dir.path()).unwrap();

    let id = store.persist(&Graph::new()).unwrap();
    assert!(id.path.exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_fragment_filter_is_case_insensitive() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("data.TTL"),
        "<http://example.org/a> <http://example.org/value> \"1\" .\n",
    )
    .unwrap();
    fs::write(dir.path().join("data.txt"), "not a fragment at all").unwrap();

    let filter = FragmentFilter::default();
    assert!(filter.accept(&dir.path().join("data.TTL")));
    assert!(!filter.accept(&dir.path().join("data.txt")));

    let graph = load(dir.path()).unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_corrupt_fragment_names_the_file() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = FragmentStore::open(dir.path()).unwrap();
    store.persist(&[fact("a", 1)].into_iter().collect()).unwrap();

    let broken = dir.path().join("BagCAT_99999999999999999999.ttl");
    fs::write(&broken, "<http://example.org/a> <http://example.org/value> .").unwrap();

    match store.load() {
        Err(CatalogError::CorruptFragment { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected CorruptFragment, got {:?}", other),
    }
}

#[test]
fn test_blank_nodes_from_different_fragments_stay_distinct() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let triple = "_:b0 <http://example.org/value> \"1\" .\n";
    fs::write(dir.path().join("one.ttl"), triple).unwrap();
    fs::write(dir.path().join("two.ttl"), triple).unwrap();

    let graph = DirectoryLoader::new(dir.path()).load().unwrap();
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_blank_nodes_from_dash_named_fragment_can_be_queried_and_rewritten() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-x.ttl"), "_:b0 <http://example.org/value> \"1\" .\n").unwrap();
    let catalog = BagCatalog::open(dir.path()).unwrap();

    let merged = catalog.snapshot().unwrap();
    let rows = merged.select("SELECT ?s WHERE { ?s <http://example.org/value> ?v }").unwrap();
    assert_eq!(rows.len(), 1);

    catalog.persist_graph(&merged.asserted).unwrap();
    assert_eq!(catalog.snapshot().unwrap().asserted.len(), 2);
}

#[test]
fn test_custom_naming_from_config() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        directory: dir.path().to_path_buf(),
        prefix: "fleet".to_string(),
        extension: "turtle".to_string(),
    };
    let store = FragmentStore::new(config).unwrap();

    let id = store.persist(&[fact("a", 1)].into_iter().collect()).unwrap();
    assert!(id.name.starts_with("fleet_"));
    assert!(id.name.ends_with(".turtle"));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let config = StoreConfig { prefix: "a/b".to_string(), ..StoreConfig::default() };
    assert!(matches!(FragmentStore::new(config), Err(CatalogError::Config(_))));
}
