#![warn(missing_docs)]
//! Typed models for the core block storage service: volume groups, their
//! cross-region replicas, and the polymorphic family of sources a volume
//! group can be created from.
//!
//! These are plain value objects. They carry no transport; a caller builds
//! them before an API request and serializes them to the JSON bodies the
//! service expects, or deserializes them from its responses.

/// Volume group models and request bodies.
pub mod volume_group;
/// Volume group replica models.
pub mod volume_group_replica;
/// The polymorphic volume group source family.
pub mod volume_group_source;

pub use volume_group::*;
pub use volume_group_replica::*;
pub use volume_group_source::*;
