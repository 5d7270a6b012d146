use crate::{
    volume_group::{VolumeGroupBackupId, VolumeGroupId, VolumeId},
    volume_group_replica::VolumeGroupReplicaId,
};
use oci_common::ValidateEnumValues;
use serde::{Deserialize, Serialize};

/// Specifies what a new volume group is created from.
///
/// The wire format is a tagged union: the `type` field carries the
/// discriminator literal the service dispatches on, alongside the payload
/// of the selected variant.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum VolumeGroupSourceDetails {
    /// Assemble the group from individual volumes.
    #[serde(rename = "volumeIds", rename_all = "camelCase")]
    Volumes {
        /// The OCIDs of the volumes to group together.
        volume_ids: Vec<VolumeId>,
    },
    /// Clone the group from another volume group.
    #[serde(rename = "volumeGroupId", rename_all = "camelCase")]
    VolumeGroup {
        /// The OCID of the source volume group.
        volume_group_id: VolumeGroupId,
    },
    /// Restore the group from a volume group backup.
    #[serde(rename = "volumeGroupBackupId", rename_all = "camelCase")]
    VolumeGroupBackup {
        /// The OCID of the source volume group backup.
        volume_group_backup_id: VolumeGroupBackupId,
    },
    /// Activate the group from a volume group replica.
    /// The replica must live in the same availability domain as the new
    /// group, and only one group may be created from a replica at a time.
    #[serde(rename = "volumeGroupReplicaId", rename_all = "camelCase")]
    VolumeGroupReplica {
        /// The OCID of the source volume group replica.
        volume_group_replica_id: VolumeGroupReplicaId,
    },
}

impl VolumeGroupSourceDetails {
    /// The discriminator literal this variant is tagged with on the wire.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Volumes { .. } => "volumeIds",
            Self::VolumeGroup { .. } => "volumeGroupId",
            Self::VolumeGroupBackup { .. } => "volumeGroupBackupId",
            Self::VolumeGroupReplica { .. } => "volumeGroupReplicaId",
        }
    }
}

impl ValidateEnumValues for VolumeGroupSourceDetails {}

impl From<VolumeGroupId> for VolumeGroupSourceDetails {
    fn from(volume_group_id: VolumeGroupId) -> Self {
        Self::VolumeGroup { volume_group_id }
    }
}
impl From<VolumeGroupBackupId> for VolumeGroupSourceDetails {
    fn from(volume_group_backup_id: VolumeGroupBackupId) -> Self {
        Self::VolumeGroupBackup {
            volume_group_backup_id,
        }
    }
}
impl From<VolumeGroupReplicaId> for VolumeGroupSourceDetails {
    fn from(volume_group_replica_id: VolumeGroupReplicaId) -> Self {
        Self::VolumeGroupReplica {
            volume_group_replica_id,
        }
    }
}
impl From<Vec<VolumeId>> for VolumeGroupSourceDetails {
    fn from(volume_ids: Vec<VolumeId>) -> Self {
        Self::Volumes { volume_ids }
    }
}
