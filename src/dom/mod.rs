//! Owned document model: arena nodes, mutation journal, HTML ingest
//! and serialization.
//!
//! Stands in for the host document environment. Insertions are recorded
//! in a journal and delivered in batches, so the order-sensitive image
//! watcher semantics stay first-class.

mod document;
mod ingest;
mod node;
mod render;

pub use document::{Document, MutationBatch};
pub use node::{Element, Node, NodeData, NodeId};
