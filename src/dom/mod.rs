//! DOM arena: slotmap-backed node tree with class queries and attributes.

pub mod attributes;
pub mod node;
pub mod tree;
pub mod query;

pub use attributes::Attributes;
pub use node::{NodeData, NodeId};
pub use query::Selector;
pub use tree::Dom;
