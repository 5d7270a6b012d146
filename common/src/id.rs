//! Typed string identifiers.
//!
//! Every resource handled by the API is addressed by an OCID, an opaque
//! server-assigned string. Each binding crate declares one newtype per
//! resource kind so that, eg, a volume group id cannot be passed where a
//! replica id is expected. On the wire all of them are plain JSON strings.

/// Implements a typed string identifier and its string conversions.
#[macro_export]
macro_rules! api_impl_string_id {
    ($Name:ident, $Doc:literal) => {
        #[doc = $Doc]
        #[derive(Serialize, Deserialize, Default, Debug, Clone, Eq, PartialEq, Hash)]
        pub struct $Name(String);

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $Name {
            /// Build Self from any string-like id.
            pub fn new(id: impl Into<String>) -> Self {
                $Name(id.into())
            }
            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $Name {
            fn from(id: &str) -> Self {
                $Name(id.to_string())
            }
        }
        impl From<String> for $Name {
            fn from(id: String) -> Self {
                $Name(id)
            }
        }
        impl From<&$Name> for $Name {
            fn from(id: &$Name) -> $Name {
                id.clone()
            }
        }

        impl From<$Name> for String {
            fn from(id: $Name) -> String {
                id.0
            }
        }
        impl From<&$Name> for String {
            fn from(id: &$Name) -> String {
                id.to_string()
            }
        }
    };
}
