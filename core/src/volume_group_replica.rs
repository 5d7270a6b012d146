use crate::volume_group::VolumeGroupId;
use chrono::{DateTime, Utc};
use oci_common::{
    api_impl_string_id, mapping, AvailabilityDomain, CompartmentId, ValidateEnumValues,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

api_impl_string_id!(VolumeGroupReplicaId, "OCID of a volume group replica");

/// Lifecycle of a volume group replica.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Display, EnumString, EnumIter, Eq, PartialEq, Hash,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeGroupReplicaLifecycleState {
    /// Being created; not yet synced.
    Provisioning,
    /// Synced and usable as a creation source.
    Available,
    /// Being turned into a volume group.
    Activating,
    /// Being deleted.
    Terminating,
    /// Deleted.
    Terminated,
    /// Unusable due to a service-side fault.
    Faulty,
}

impl VolumeGroupReplicaLifecycleState {
    /// The closed set of allowed values.
    pub fn values() -> Vec<Self> {
        Self::iter().collect()
    }
    /// The allowed values as they appear on the wire.
    pub fn string_values() -> Vec<String> {
        Self::iter().map(|value| value.to_string()).collect()
    }
    /// Case-insensitive lookup of a wire label. A miss yields `None`.
    pub fn mapping(value: &str) -> Option<Self> {
        mapping("VolumeGroupReplicaLifecycleState", value)
    }
}

/// A point-in-time, cross-region copy of a volume group, usable as a
/// creation source for a new group in its own region.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeGroupReplica {
    /// The OCID of the replica.
    pub id: VolumeGroupReplicaId,
    /// The OCID of the compartment the replica lives in.
    pub compartment_id: CompartmentId,
    /// The availability domain of the replica.
    pub availability_domain: AvailabilityDomain,
    /// Display name; not guaranteed to be unique.
    pub display_name: String,
    /// Current lifecycle state.
    pub lifecycle_state: VolumeGroupReplicaLifecycleState,
    /// Aggregate size of the replicated group in MBs.
    #[serde(rename = "sizeInMBs")]
    pub size_in_mbs: i64,
    /// When the replica was created.
    pub time_created: DateTime<Utc>,
    /// The OCID of the volume group being replicated.
    pub volume_group_id: VolumeGroupId,
    /// When the replica last caught up with its source group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_last_synced: Option<DateTime<Utc>>,
}

impl ValidateEnumValues for VolumeGroupReplica {}
