use snafu::Snafu;

/// Error raised when a request type carries unsupported wire values.
#[derive(Debug, Snafu, Clone, Eq, PartialEq)]
#[snafu(visibility(pub))]
pub enum ValidationError {
    /// One or more fields hold values outside their allowed enum sets.
    /// The display output is one message per offending field.
    #[snafu(display("{}", messages.join("\n")))]
    UnsupportedEnumValues {
        /// One message per offending field.
        messages: Vec<String>,
    },
}

impl ValidationError {
    /// Build from collected per-field messages. An empty list means the
    /// request checked out, so no error is produced.
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self::UnsupportedEnumValues { messages })
        }
    }
}

/// Pre-flight check run against a request body before it is serialized.
///
/// Enum-typed fields are closed sum types in these bindings, so an
/// unsupported value cannot normally be constructed and the default
/// implementation holds. Types whose constraints go beyond the type system
/// override this and report every offending field at once.
pub trait ValidateEnumValues {
    /// Check every constrained field holds a supported value.
    fn validate_enum_values(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
