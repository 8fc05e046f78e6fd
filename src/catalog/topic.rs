//! Topic metadata: one topic inside one bag file, and its message type.

use crate::catalog::resource;
use crate::core::{Fact, Graph, Literal, Node, Term};
use crate::error::{CatalogError, Result};
use crate::vocabulary::BagCat;
use oxigraph::model::vocab::rdf;
use std::cmp::Ordering;

/// A message schema, identified by its type name and checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageType {
    name: String,
    md5sum: String,
}

impl MessageType {
    pub fn new(name: impl Into<String>, md5sum: impl Into<String>) -> Self {
        Self { name: name.into(), md5sum: md5sum.into() }
    }

    /// The type name, e.g. `std_msgs/GPSFix`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn md5sum(&self) -> &str {
        &self.md5sum
    }

    /// Package part of a `package/Type` name.
    pub fn package_name(&self) -> Option<&str> {
        self.name.split_once('/').map(|(package, _)| package).filter(|p| !p.is_empty())
    }

    /// Compares type names only. Within one bag a type name is unique, so the
    /// checksum is not consulted; two types with the same name and different
    /// checksums compare `Equal` here while being unequal under `==`.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Information about a topic inside a bag file.
///
/// Counters only grow. The struct has no interior locking; share it across
/// threads behind a mutex if more than one of them mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicInfo {
    name: String,
    message_type: MessageType,
    message_count: u64,
    connection_count: u64,
}

impl TopicInfo {
    /// Creates a topic with zeroed counters.
    ///
    /// * `name` - e.g. `/localization/gps`
    /// * `type_name` - e.g. `std_msgs/GPSFix`
    /// * `md5sum` - e.g. `3db3d0a7bc53054c67c528af84710b70`
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, md5sum: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_type: MessageType::new(type_name, md5sum),
            message_count: 0,
            connection_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message_type(&self) -> &MessageType {
        &self.message_type
    }

    /// Number of messages published on this topic.
    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    /// Number of connections made on this topic.
    pub fn connection_count(&self) -> u64 {
        self.connection_count
    }

    /// Adds `delta` messages. Negative deltas, and deltas that would overflow
    /// the counter, are rejected and leave it unchanged.
    pub fn add_to_message_count(&mut self, delta: i64) -> Result<()> {
        let delta = u64::try_from(delta).map_err(|_| {
            CatalogError::InvalidArgument(format!(
                "message count delta for topic {} must not be negative, got {}",
                self.name, delta
            ))
        })?;
        self.message_count = self.message_count.checked_add(delta).ok_or_else(|| {
            CatalogError::InvalidArgument(format!("message count overflow on topic {}", self.name))
        })?;
        Ok(())
    }

    pub fn increment_connection_count(&mut self) {
        self.connection_count = self.connection_count.saturating_add(1);
    }

    /// Compares topic names only; within a bag every topic name is unique.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Translates a topic into catalog facts, using an unscoped topic node.
///
/// This is the only way collaborator-supplied topic metadata enters the store.
pub fn translate_to_facts(topic: &TopicInfo) -> Graph {
    topic_facts(topic, None)
}

/// Topic facts with the topic node scoped to `bag` when given.
pub(crate) fn topic_facts(topic: &TopicInfo, bag: Option<&str>) -> Graph {
    let topic_node = Node::Iri(resource::topic_node(bag, topic.name()));
    let message_type = topic.message_type();
    let type_node = Node::Iri(resource::message_type_node(message_type.name(), message_type.md5sum()));

    let mut facts = Graph::new();
    facts.insert(Fact::new(topic_node.clone(), rdf::TYPE.as_str(), Term::iri(BagCat::BagFileTopic.iri())));
    facts.insert(Fact::new(topic_node.clone(), BagCat::TopicName, Literal::string(topic.name())));
    facts.insert(Fact::new(topic_node.clone(), BagCat::NrOfMessages, Literal::integer(topic.message_count())));
    facts.insert(Fact::new(
        topic_node.clone(),
        BagCat::NrOfConnections,
        Literal::integer(topic.connection_count()),
    ));
    facts.insert(Fact::new(topic_node, BagCat::MessageType, type_node.clone()));

    facts.insert(Fact::new(type_node.clone(), rdf::TYPE.as_str(), Term::iri(BagCat::BagFileType.iri())));
    facts.insert(Fact::new(type_node.clone(), BagCat::Name, Literal::string(message_type.name())));
    facts.insert(Fact::new(type_node.clone(), BagCat::Md5, Literal::string(message_type.md5sum())));
    if let Some(package) = message_type.package_name() {
        facts.insert(Fact::new(type_node, BagCat::PackageName, Literal::string(package)));
    }
    facts
}
