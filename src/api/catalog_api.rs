use crate::{
    catalog::{translate_to_facts, BagInfo, TopicInfo},
    core::Graph,
    error::Result,
    querying::{
        pattern::{Matches, TriplePattern},
        sparql::SparqlAdapter,
    },
    reasoning::{entail, Closure, Schema},
    storage::{
        fragment_store::FragmentStore,
        loader::CatalogSource,
        util::{FragmentId, StoreConfig},
    },
};
use std::{collections::HashMap, path::PathBuf};

/// The catalog as seen by one load: the facts read from disk and their closure.
/// Recomputed on every [`BagCatalog::snapshot`], never persisted.
#[derive(Debug, Clone)]
pub struct MergedGraph {
    pub asserted: Graph,
    pub closure: Closure,
}

impl MergedGraph {
    pub fn query(&self, pattern: &TriplePattern) -> Matches<'_> {
        self.closure.query(pattern)
    }

    pub fn select(&self, sparql: &str) -> Result<Vec<HashMap<String, String>>> {
        SparqlAdapter::new().select(&self.closure, sparql)
    }
}

/// Write and read entry point over one fragment directory.
///
/// `BagCatalog` is `Sync`; share it behind an `Arc` to persist from several threads.
pub struct BagCatalog {
    store: FragmentStore,
    schema: Schema,
}

impl BagCatalog {
    pub fn new(config: StoreConfig, schema: Schema) -> Result<Self> {
        Ok(Self { store: FragmentStore::new(config)?, schema })
    }

    /// Catalog over `directory` with default naming and the flat bagcat schema.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        Self::new(StoreConfig::with_directory(directory), Schema::bagcat())
    }

    /// Catalog configured from the environment (see [`StoreConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env(), Schema::bagcat())
    }

    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn persist_topic(&self, topic: &TopicInfo) -> Result<FragmentId> {
        self.store.persist(&translate_to_facts(topic))
    }

    /// Persists a bag with all of its topics as one fragment.
    pub fn persist_bag(&self, bag: &BagInfo, catalog: Option<&str>) -> Result<FragmentId> {
        self.store.persist(&bag.to_facts(catalog)?)
    }

    pub fn persist_graph(&self, facts: &Graph) -> Result<FragmentId> {
        self.store.persist(facts)
    }

    /// Loads every fragment and entails the closure.
    pub fn snapshot(&self) -> Result<MergedGraph> {
        let asserted = self.store.load()?;
        let closure = entail(&asserted, &self.schema);
        Ok(MergedGraph { asserted, closure })
    }
}
