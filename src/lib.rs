//! # BagCat
//!
//! A semantic catalog store for recorded sensor-log files ("bags").
//!
//! Metadata about bags and their topics is translated into RDF facts over the
//! bagcat vocabulary. Every update is persisted as its own immutable Turtle
//! fragment; reading loads all fragments, merges them into one graph, applies
//! RDFS entailment and answers triple-pattern or SPARQL queries over the result.
//!
//! ## Example
//!
//! ```no_run
//! use bagcat::{BagCatalog, BagCat, Node, TopicInfo, TriplePattern};
//! use bagcat::catalog::resource::topic_node;
//!
//! fn example() -> bagcat::Result<()> {
//!     let catalog = BagCatalog::open("out/_ciw_metastore")?;
//!
//!     let mut gps = TopicInfo::new("/gps", "std_msgs/GPSFix", "3db3d0a7bc53054c67c528af84710b70");
//!     gps.add_to_message_count(120)?;
//!     gps.increment_connection_count();
//!     catalog.persist_topic(&gps)?;
//!
//!     let merged = catalog.snapshot()?;
//!     let pattern = TriplePattern::any()
//!         .with_subject(Node::iri(topic_node(None, "/gps")))
//!         .with_predicate(BagCat::NrOfMessages);
//!     for binding in merged.query(&pattern) {
//!         println!("{:?}", binding.object());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unnecessary_map_or)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

/// Catalog facade combining storage, loading and inference
pub mod api;

/// Bag and topic metadata models
pub mod catalog;

/// Core data structures and types
pub mod core;

pub mod error;

/// Turtle serialization of fragments
pub mod parsing;

/// Triple-pattern and SPARQL queries
pub mod querying;

pub mod reasoning;

/// Fragment persistence and loading
pub mod storage;

/// The bagcat vocabulary
pub mod vocabulary;

pub use api::{BagCatalog, MergedGraph};
pub use catalog::{translate_to_facts, BagInfo, MessageType, TopicInfo};
pub use core::{Fact, Graph, Literal, Node, Term};
pub use error::{CatalogError, Result};
pub use querying::{Binding, TriplePattern};
pub use reasoning::{entail, Closure, Schema};
pub use storage::{load, CatalogSource, FragmentId, FragmentStore, StoreConfig};
pub use vocabulary::BagCat;
