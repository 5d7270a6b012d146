#![warn(missing_docs)]
//! Typed models for the container engine service: node pools and the
//! sources their worker nodes are created from.
//!
//! These are plain value objects. They carry no transport; a caller builds
//! them before an API request and serializes them to the JSON bodies the
//! service expects, or deserializes them from its responses.

/// Node pool models.
pub mod node_pool;
/// Node source models and the source-type enum.
pub mod node_source;

pub use node_pool::*;
pub use node_source::*;
