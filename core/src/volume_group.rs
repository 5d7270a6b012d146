use crate::volume_group_source::VolumeGroupSourceDetails;
use chrono::{DateTime, Utc};
use oci_common::{
    api_impl_string_id, mapping, AvailabilityDomain, CompartmentId, ValidateEnumValues,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

api_impl_string_id!(VolumeId, "OCID of a volume");
api_impl_string_id!(VolumeGroupId, "OCID of a volume group");
api_impl_string_id!(VolumeGroupBackupId, "OCID of a volume group backup");

/// Lifecycle of a volume group.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Display, EnumString, EnumIter, Eq, PartialEq, Hash,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeGroupLifecycleState {
    /// Being created; not yet usable.
    Provisioning,
    /// Created and usable.
    Available,
    /// Being deleted.
    Terminating,
    /// Deleted.
    Terminated,
    /// Unusable due to a service-side fault.
    Faulty,
    /// A membership update is pending.
    UpdatePending,
}

impl VolumeGroupLifecycleState {
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
        mapping("VolumeGroupLifecycleState", value)
    }
    /// Is the group gone, or on its way out.
    pub fn terminal(&self) -> bool {
        matches!(self, Self::Terminating | Self::Terminated)
    }
}

/// A volume group as reported by the service.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeGroup {
    /// The OCID of the volume group.
    pub id: VolumeGroupId,
    /// The OCID of the compartment the group lives in.
    pub compartment_id: CompartmentId,
    /// The availability domain of the group.
    pub availability_domain: AvailabilityDomain,
    /// Display name; not guaranteed to be unique.
    pub display_name: String,
    /// Current lifecycle state.
    pub lifecycle_state: VolumeGroupLifecycleState,
    /// Aggregate size of the group in MBs.
    #[serde(rename = "sizeInMBs")]
    pub size_in_mbs: i64,
    /// When the group was created.
    pub time_created: DateTime<Utc>,
    /// The OCIDs of the member volumes.
    pub volume_ids: Vec<VolumeId>,
    /// Whether a group restored from a source has finished hydrating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hydrated: Option<bool>,
}

impl VolumeGroup {
    /// Is the group usable.
    pub fn available(&self) -> bool {
        self.lifecycle_state == VolumeGroupLifecycleState::Available
    }
}

impl ValidateEnumValues for VolumeGroup {}

/// Request body for creating a volume group.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolumeGroupDetails {
    /// The availability domain to create the group in.
    pub availability_domain: AvailabilityDomain,
    /// The OCID of the compartment to create the group in.
    pub compartment_id: CompartmentId,
    /// Display name; the service picks one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// What the group is created from.
    pub source_details: VolumeGroupSourceDetails,
    /// Cross-region replicas to keep for the new group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_group_replicas: Option<Vec<VolumeGroupReplicaDetails>>,
}

impl CreateVolumeGroupDetails {
    /// Return a new `Self` creating a group from the given source.
    pub fn new(
        availability_domain: impl Into<AvailabilityDomain>,
        compartment_id: impl Into<CompartmentId>,
        source_details: impl Into<VolumeGroupSourceDetails>,
    ) -> Self {
        Self {
            availability_domain: availability_domain.into(),
            compartment_id: compartment_id.into(),
            display_name: None,
            source_details: source_details.into(),
            volume_group_replicas: None,
        }
    }
}

impl ValidateEnumValues for CreateVolumeGroupDetails {}

/// A cross-region replica requested alongside a volume group.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeGroupReplicaDetails {
    /// The availability domain to replicate into.
    pub availability_domain: AvailabilityDomain,
    /// Display name of the replica; the service picks one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Request body for updating a volume group. Unset fields are left as-is.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolumeGroupDetails {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New membership; replaces the current volume set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ids: Option<Vec<VolumeId>>,
}

impl ValidateEnumValues for UpdateVolumeGroupDetails {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume_group_replica::VolumeGroupReplicaId;

    #[test]
    fn lifecycle_mapping_is_case_insensitive() {
        for label in ["AVAILABLE", "Available", "available"] {
            assert_eq!(
                VolumeGroupLifecycleState::mapping(label),
                Some(VolumeGroupLifecycleState::Available)
            );
        }
        assert_eq!(
            VolumeGroupLifecycleState::mapping("update_pending"),
            Some(VolumeGroupLifecycleState::UpdatePending)
        );
        assert_eq!(VolumeGroupLifecycleState::mapping("RESIZING"), None);
    }

    #[test]
    fn lifecycle_string_values() {
        assert_eq!(
            VolumeGroupLifecycleState::string_values(),
            vec![
                "PROVISIONING",
                "AVAILABLE",
                "TERMINATING",
                "TERMINATED",
                "FAULTY",
                "UPDATE_PENDING"
            ]
        );
    }

    #[test]
    fn create_details_serialize_with_the_source_tag() {
        let details = CreateVolumeGroupDetails::new(
            "Uocm:PHX-AD-1",
            "ocid1.compartment.oc1..example",
            VolumeGroupReplicaId::from("ocid1.volumegroupreplica.example"),
        );
        assert!(details.validate_enum_values().is_ok());
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..example",
                "sourceDetails": {
                    "type": "volumeGroupReplicaId",
                    "volumeGroupReplicaId": "ocid1.volumegroupreplica.example",
                },
            })
        );
    }

    #[test]
    fn test_volume_group_deserializer() {
        let input = r#"{
            "id": "ocid1.volumegroup.oc1.phx.example",
            "compartmentId": "ocid1.compartment.oc1..example",
            "availabilityDomain": "Uocm:PHX-AD-1",
            "displayName": "volume-group-1",
            "lifecycleState": "AVAILABLE",
            "sizeInMBs": 51200,
            "timeCreated": "2024-03-01T10:15:30Z",
            "volumeIds": ["ocid1.volume.oc1.phx.a"],
            "isHydrated": true
        }"#;
        let group: VolumeGroup = serde_json::from_str(input).unwrap();
        assert_eq!(group.id.as_str(), "ocid1.volumegroup.oc1.phx.example");
        assert_eq!(
            group.lifecycle_state,
            VolumeGroupLifecycleState::Available
        );
        assert!(group.available());
        assert!(!group.lifecycle_state.terminal());
        assert_eq!(group.size_in_mbs, 51200);
        assert_eq!(group.volume_ids, vec![VolumeId::from("ocid1.volume.oc1.phx.a")]);
        assert_eq!(group.is_hydrated, Some(true));
    }

    #[test]
    fn update_details_skip_unset_fields() {
        let details = UpdateVolumeGroupDetails {
            display_name: Some("renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&details).unwrap(),
            r#"{"displayName":"renamed"}"#
        );
    }
}
