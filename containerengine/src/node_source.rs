use crate::node_pool::ImageId;
use oci_common::{mapping, ValidateEnumValues};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The kind of source a node pool's worker nodes are created from.
/// `IMAGE` is the only kind the service currently accepts.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Display, EnumString, EnumIter, Eq, PartialEq, Hash,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeSourceType {
    /// Nodes boot from a platform or custom image.
    Image,
}

impl NodeSourceType {
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
        mapping("NodeSourceType", value)
    }
}

/// The source a node pool's worker nodes are created from, tagged on the
/// wire with the `sourceType` discriminator so the service can dispatch on
/// the concrete variant.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "sourceType")]
pub enum NodeSourceDetails {
    /// Nodes boot from an image.
    #[serde(rename = "IMAGE")]
    Image(NodeSourceViaImageDetails),
}

impl NodeSourceDetails {
    /// The source type this variant is dispatched on.
    pub fn source_type(&self) -> NodeSourceType {
        match self {
            Self::Image(_) => NodeSourceType::Image,
        }
    }
}

impl ValidateEnumValues for NodeSourceDetails {}

impl From<NodeSourceViaImageDetails> for NodeSourceDetails {
    fn from(details: NodeSourceViaImageDetails) -> Self {
        Self::Image(details)
    }
}

/// Details of the image backing a node pool's worker nodes.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeSourceViaImageDetails {
    /// The OCID of the image the nodes boot from.
    pub image_id: ImageId,
    /// Size of the boot volume in GBs; the service picks the image
    /// default when unset.
    #[serde(rename = "bootVolumeSizeInGBs", skip_serializing_if = "Option::is_none")]
    pub boot_volume_size_in_gbs: Option<i64>,
}

impl NodeSourceViaImageDetails {
    /// Return a new `Self` booting from the given image.
    pub fn new(image_id: impl Into<ImageId>) -> Self {
        Self {
            image_id: image_id.into(),
            boot_volume_size_in_gbs: None,
        }
    }
}

impl ValidateEnumValues for NodeSourceViaImageDetails {}

/// A node source advertised by the service as usable for new node pools,
/// tagged with the same `sourceType` discriminator as the details above.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "sourceType")]
pub enum NodeSourceOption {
    /// An image source listing.
    #[serde(rename = "IMAGE")]
    Image(NodeSourceViaImageOption),
}

impl NodeSourceOption {
    /// The source type this variant is dispatched on.
    pub fn source_type(&self) -> NodeSourceType {
        match self {
            Self::Image(_) => NodeSourceType::Image,
        }
    }
}

/// An image listed as usable for new node pools.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeSourceViaImageOption {
    /// Human-friendly name of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// The OCID of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_case_insensitive() {
        for label in ["IMAGE", "Image", "image", "iMaGe"] {
            assert_eq!(NodeSourceType::mapping(label), Some(NodeSourceType::Image));
        }
        assert_eq!(NodeSourceType::mapping("qcow2"), None);
        assert_eq!(NodeSourceType::mapping(""), None);
    }

    #[test]
    fn string_values_is_exactly_image() {
        assert_eq!(NodeSourceType::string_values(), vec!["IMAGE".to_string()]);
        assert_eq!(NodeSourceType::values(), vec![NodeSourceType::Image]);
    }

    #[test]
    fn source_type_serializes_to_the_wire_literal() {
        assert_eq!(
            serde_json::to_string(&NodeSourceType::Image).unwrap(),
            r#""IMAGE""#
        );
    }

    #[test]
    fn details_carry_the_discriminator() {
        let details = NodeSourceDetails::from(NodeSourceViaImageDetails::new(
            "ocid1.image.oc1.phx.example",
        ));
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sourceType": "IMAGE",
                "imageId": "ocid1.image.oc1.phx.example",
            })
        );
    }

    #[test]
    fn details_deserialize_on_the_discriminator() {
        let json = r#"{
            "sourceType": "IMAGE",
            "imageId": "ocid1.image.oc1.phx.example",
            "bootVolumeSizeInGBs": 100
        }"#;
        let details: NodeSourceDetails = serde_json::from_str(json).unwrap();
        let NodeSourceDetails::Image(image) = &details;
        assert_eq!(image.image_id.as_str(), "ocid1.image.oc1.phx.example");
        assert_eq!(image.boot_volume_size_in_gbs, Some(100));
        assert_eq!(details.source_type(), NodeSourceType::Image);
    }

    #[test]
    fn details_validate_vacuously() {
        let details = NodeSourceViaImageDetails::new("ocid1.image.oc1.phx.example");
        assert!(details.validate_enum_values().is_ok());
        assert!(NodeSourceDetails::from(details).validate_enum_values().is_ok());
    }
}
