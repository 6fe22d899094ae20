use serde_json::{Map, Value};

use crate::error::AdapterError;

/// String keyed dictionary received from the cross-platform side.
///
/// Reads are typed: asking for a key that is absent, or that holds a value of another type,
/// fails with an [`AdapterError`]. Callers check [`ReadableMap::has_key`] first for optional
/// entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadableMap(Map<String, Value>);

impl ReadableMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object.
    pub fn from_json(json: &str) -> Result<Self, AdapterError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Adds an entry, replacing the previous value of the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns true if the key is present, whatever its value.
    pub fn has_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Reads a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, AdapterError> {
        self.value(key)?
            .as_bool()
            .ok_or_else(|| mismatch(key, "a boolean"))
    }

    /// Reads a 32 bit integer. Whole floating point numbers are accepted.
    pub fn get_int(&self, key: &str) -> Result<i32, AdapterError> {
        let value = self.value(key)?;
        let int = match value.as_i64() {
            Some(int) => int,
            None => match value.as_f64() {
                Some(float) if float.fract() == 0.0 => float as i64,
                _ => return Err(mismatch(key, "an integer")),
            },
        };

        i32::try_from(int).map_err(|_| mismatch(key, "a 32 bit integer"))
    }

    /// Reads a string.
    pub fn get_string(&self, key: &str) -> Result<String, AdapterError> {
        self.value(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(key, "a string"))
    }

    fn value(&self, key: &str) -> Result<&Value, AdapterError> {
        self.0
            .get(key)
            .ok_or_else(|| AdapterError::MissingKey(key.to_string()))
    }
}

impl From<Map<String, Value>> for ReadableMap {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl TryFrom<Value> for ReadableMap {
    type Error = AdapterError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AdapterError::InvalidPayload(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}

fn mismatch(key: &str, expected: &'static str) -> AdapterError {
    AdapterError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads() {
        let map = ReadableMap::new()
            .with("flag", true)
            .with("size", 14)
            .with("whole", 3.0)
            .with("name", "value");

        assert_eq!(map.get_bool("flag"), Ok(true));
        assert_eq!(map.get_int("size"), Ok(14));
        assert_eq!(map.get_int("whole"), Ok(3));
        assert_eq!(map.get_string("name"), Ok("value".to_string()));
    }

    #[test]
    fn absent_key_fails() {
        let map = ReadableMap::new();
        assert!(!map.has_key("flag"));
        assert_eq!(
            map.get_bool("flag"),
            Err(AdapterError::MissingKey("flag".into()))
        );
    }

    #[test]
    fn wrong_type_fails() {
        let map = ReadableMap::new()
            .with("flag", "yes")
            .with("size", 1.5)
            .with("huge", i64::MAX);

        assert!(matches!(
            map.get_bool("flag"),
            Err(AdapterError::TypeMismatch { expected: "a boolean", .. })
        ));
        assert!(matches!(
            map.get_int("size"),
            Err(AdapterError::TypeMismatch { .. })
        ));
        assert!(matches!(
            map.get_int("huge"),
            Err(AdapterError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(
            ReadableMap::from_json("[1, 2]"),
            Err(AdapterError::InvalidPayload(_))
        ));
        assert_eq!(
            ReadableMap::from_json(r#"{"a": null}"#).map(|m| m.has_key("a")),
            Ok(true)
        );
    }
}
