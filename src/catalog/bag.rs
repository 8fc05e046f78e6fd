//! Bag-level metadata and its translation into catalog facts.

use crate::catalog::resource;
use crate::catalog::topic::{topic_facts, TopicInfo};
use crate::core::{Fact, Graph, Literal, Node, Term};
use crate::error::{CatalogError, Result};
use crate::vocabulary::BagCat;
use oxigraph::model::vocab::rdf;

/// Descriptive attributes of one recorded bag file, plus the topics found in it.
#[derive(Debug, Clone, PartialEq)]
pub struct BagInfo {
    pub filename: String,
    pub version: Option<String>,
    pub compression: Option<String>,
    /// Seconds between the first and last message.
    pub duration: Option<f64>,
    /// Timestamp of the first message, seconds since epoch.
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub size_in_mb: Option<f64>,
    pub message_count: u64,
    pub topics: Vec<TopicInfo>,
}

impl BagInfo {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            version: None,
            compression: None,
            duration: None,
            start: None,
            end: None,
            size_in_mb: None,
            message_count: 0,
            topics: Vec::new(),
        }
    }

    pub fn with_topic(mut self, topic: TopicInfo) -> Self {
        self.topics.push(topic);
        self
    }

    /// Topics sorted by name.
    pub fn sorted_topics(&self) -> Vec<&TopicInfo> {
        let mut topics: Vec<&TopicInfo> = self.topics.iter().collect();
        topics.sort_by(|a, b| a.cmp_by_name(b));
        topics
    }

    /// Node identifying this bag.
    pub fn node(&self) -> Node {
        Node::Iri(resource::bag_node(&self.filename))
    }

    fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            return Err(CatalogError::InvalidArgument("bag filename must not be empty".to_string()));
        }
        for (label, value) in [
            ("duration", self.duration),
            ("start", self.start),
            ("end", self.end),
            ("sizeInMB", self.size_in_mb),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(CatalogError::InvalidArgument(format!(
                        "{} of bag {} must be finite and non-negative, got {}",
                        label, self.filename, v
                    )));
                }
            }
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end < start {
                return Err(CatalogError::InvalidArgument(format!(
                    "bag {} ends ({}) before it starts ({})",
                    self.filename, end, start
                )));
            }
        }
        Ok(())
    }

    /// Translates the bag and all of its topics into facts. Topic nodes are
    /// scoped to this bag, so equally named topics in different bags stay apart.
    pub fn to_facts(&self, catalog: Option<&str>) -> Result<Graph> {
        self.validate()?;

        let node = self.node();
        let mut facts = Graph::new();
        facts.insert(Fact::new(node.clone(), rdf::TYPE.as_str(), Term::iri(BagCat::BagFile.iri())));
        facts.insert(Fact::new(node.clone(), BagCat::Filename, Literal::string(self.filename.as_str())));
        facts.insert(Fact::new(node.clone(), BagCat::NrOfMessages, Literal::integer(self.message_count)));

        if let Some(version) = &self.version {
            facts.insert(Fact::new(node.clone(), BagCat::Version, Literal::string(version.as_str())));
        }
        if let Some(compression) = &self.compression {
            facts.insert(Fact::new(node.clone(), BagCat::Compression, Literal::string(compression.as_str())));
        }
        for (property, value) in [
            (BagCat::Duration, self.duration),
            (BagCat::Start, self.start),
            (BagCat::End, self.end),
            (BagCat::SizeInMb, self.size_in_mb),
        ] {
            if let Some(v) = value {
                facts.insert(Fact::new(node.clone(), property, Literal::double(v)));
            }
        }
        if let Some(catalog) = catalog {
            facts.insert(Fact::new(
                node.clone(),
                BagCat::AvailableInBagCatalog,
                Term::iri(resource::catalog_node(catalog)),
            ));
        }

        for topic in &self.topics {
            let topic_node = Node::Iri(resource::topic_node(Some(&self.filename), topic.name()));
            facts.union(topic_facts(topic, Some(&self.filename)));
            facts.insert(Fact::new(topic_node, BagCat::AvailableInBagFile, node.clone()));
        }
        Ok(facts)
    }
}
