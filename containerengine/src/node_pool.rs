use crate::node_source::{NodeSourceDetails, NodeSourceType};
use oci_common::{api_impl_string_id, CompartmentId, ValidateEnumValues};
use serde::{Deserialize, Serialize};

api_impl_string_id!(NodePoolId, "OCID of a node pool");
api_impl_string_id!(ClusterId, "OCID of a cluster");
api_impl_string_id!(ImageId, "OCID of an image");

/// A node pool as reported by the service.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodePool {
    /// The OCID of the node pool.
    pub id: NodePoolId,
    /// The OCID of the compartment the node pool lives in.
    pub compartment_id: CompartmentId,
    /// The OCID of the cluster the node pool belongs to.
    pub cluster_id: ClusterId,
    /// Display name; not guaranteed to be unique.
    pub name: String,
    /// Kubernetes version running on the pool's nodes.
    pub kubernetes_version: String,
    /// Shape of the pool's nodes.
    pub node_shape: String,
    /// Source the pool's nodes are created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_source_details: Option<NodeSourceDetails>,
    /// Number of nodes the pool keeps per subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_per_subnet: Option<u32>,
}

impl NodePool {
    /// The source type of the pool's nodes, when a source is set.
    pub fn source_type(&self) -> Option<NodeSourceType> {
        self.node_source_details
            .as_ref()
            .map(|details| details.source_type())
    }
}

impl ValidateEnumValues for NodePool {}
