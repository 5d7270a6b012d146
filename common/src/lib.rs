#![warn(missing_docs)]
//! Machinery shared by the per-service binding crates: typed resource
//! identifiers, the request validation contract and the case-insensitive
//! wire-label lookup used by every closed string enum.

/// Typed string identifier macros.
pub mod id;
/// Request validation contract and its error type.
pub mod validate;
/// Wire-label helpers for closed string enums.
pub mod wire;

pub use validate::{ValidateEnumValues, ValidationError};
pub use wire::mapping;

use serde::{Deserialize, Serialize};

crate::api_impl_string_id!(CompartmentId, "OCID of a compartment");
crate::api_impl_string_id!(
    AvailabilityDomain,
    "Name of an availability domain, eg: `Uocm:PHX-AD-1`"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_plain_string() {
        let id = CompartmentId::from("ocid1.compartment.oc1..example");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""ocid1.compartment.oc1..example""#
        );
        assert_eq!(id.to_string(), "ocid1.compartment.oc1..example");
    }

    #[test]
    fn id_deserializes_from_plain_string() {
        let id: AvailabilityDomain = serde_json::from_str(r#""Uocm:PHX-AD-1""#).unwrap();
        assert_eq!(id.as_str(), "Uocm:PHX-AD-1");
    }
}
