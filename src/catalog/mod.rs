//! Metadata models that are translated into catalog facts.

pub mod bag;
pub mod resource;
pub mod topic;

pub use bag::BagInfo;
pub use topic::{translate_to_facts, MessageType, TopicInfo};
