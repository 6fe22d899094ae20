use thiserror::Error;

/// Error raised by the adapter at its input boundaries.
///
/// Camera translation itself never fails: an unset camera mode is passed to the SDK as `None`.
/// Errors only come from decoding bridge payloads and from reading the configuration dictionary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdapterError {
    /// A key required by the read was not present in the dictionary.
    #[error("key `{0}` is not present in the map")]
    MissingKey(String),

    /// A dictionary value has a different type than the one the key is declared with.
    #[error("value of `{key}` is not {expected}")]
    TypeMismatch {
        /// Dictionary key.
        key: String,
        /// Expected type name.
        expected: &'static str,
    },

    /// Camera update payload names a mode this adapter does not know.
    #[error("unknown camera update mode `{0}`")]
    UnknownCameraMode(String),

    /// Camera update payload lacks the field its mode needs.
    #[error("camera update mode `{mode}` requires field `{field}`")]
    MissingField {
        /// Camera update mode.
        mode: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A platform string resource could not be found.
    #[error("platform resource `{0}` is not defined")]
    MissingResource(String),

    /// Bridge payload is not valid JSON for the expected type.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for AdapterError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidPayload(value.to_string())
    }
}
