//! Action descriptors
//!
//! An [`Action`] is the record an action creator produces: a required type tag
//! plus zero or more payload fields. On the wire it is a flat map, the tag
//! living under the reserved `type` key:
//!
//! ```text
//! {"type": "ADD", "x": 10}
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Reserved key holding the type tag in the serialized form of an action
pub const TYPE_KEY: &str = "type";

/// Payload fields of an action, keyed by field name
pub type Payload = Map<String, Value>;

/// Type tag identifying what kind of action a descriptor is
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionType(String);

impl ActionType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionType {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for ActionType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl Borrow<str> for ActionType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ActionType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Action descriptor - an immutable tagged record describing an intended state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: ActionType,
    #[serde(flatten)]
    payload: Payload,
}

impl Action {
    /// Create an action carrying only its type tag
    pub fn new(action_type: impl Into<ActionType>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Payload::new(),
        }
    }

    /// Create an action from a tag and payload fields
    ///
    /// A payload entry under the reserved `type` key is dropped; the tag always wins.
    pub fn with_payload(action_type: impl Into<ActionType>, mut payload: Payload) -> Self {
        let action_type = action_type.into();
        if payload.remove(TYPE_KEY).is_some() {
            log::debug!(
                "Dropped payload field '{}' colliding with the tag of {}",
                TYPE_KEY,
                action_type
            );
        }
        Self {
            action_type,
            payload,
        }
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    /// Payload fields, without the type tag
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Look up a single payload field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Decode a single payload field into a typed value
    pub fn field_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.field(name).ok_or_else(|| Error::MissingField {
            action_type: self.action_type.clone(),
            field: name.to_string(),
        })?;
        T::deserialize(value).map_err(|source| Error::Decode {
            action_type: self.action_type.clone(),
            source,
        })
    }

    /// Decode the whole payload into a typed value
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(Value::Object(self.payload.clone())).map_err(|source| Error::Decode {
            action_type: self.action_type.clone(),
            source,
        })
    }

    /// The flat JSON form of this action, tag included
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.payload.len() + 1);
        map.insert(
            TYPE_KEY.to_string(),
            Value::String(self.action_type.to_string()),
        );
        for (name, value) in &self.payload {
            map.insert(name.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// Build a positional argument list from JSON-like literals
///
/// ```
/// use super_actions::args;
///
/// let args = args![1, "two", { "three": 3 }];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<::serde_json::Value>::new()
    };
    ($($arg:tt)+) => {
        match ::serde_json::json!([$($arg)+]) {
            ::serde_json::Value::Array(args) => args,
            _ => ::std::unreachable!(),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_serializes_flat() {
        let mut payload = Payload::new();
        payload.insert("x".to_string(), json!(10));
        let action = Action::with_payload("ADD", payload);

        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "ADD", "x": 10})
        );
        assert_eq!(action.to_value(), json!({"type": "ADD", "x": 10}));
    }

    #[test]
    fn test_action_deserializes_flat() {
        let action: Action = serde_json::from_value(json!({"type": "SET", "a": 1})).unwrap();
        assert_eq!(action.action_type(), "SET");
        assert_eq!(action.field("a"), Some(&json!(1)));
        assert!(action.field("type").is_none());
    }

    #[test]
    fn test_type_key_in_payload_is_dropped() {
        let mut payload = Payload::new();
        payload.insert("type".to_string(), json!("OTHER"));
        payload.insert("a".to_string(), json!(1));
        let action = Action::with_payload("REAL", payload);

        assert_eq!(action.action_type(), "REAL");
        assert_eq!(action.to_value(), json!({"type": "REAL", "a": 1}));
    }

    #[test]
    fn test_field_as() {
        let action: Action = serde_json::from_value(json!({"type": "ADD", "x": 10})).unwrap();
        let x: i64 = action.field_as("x").unwrap();
        assert_eq!(x, 10);

        assert!(matches!(
            action.field_as::<i64>("y"),
            Err(Error::MissingField { .. })
        ));
        assert!(matches!(
            action.field_as::<String>("x"),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_payload_as() {
        #[derive(Deserialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let action: Action =
            serde_json::from_value(json!({"type": "MOVE", "x": 1, "y": 2})).unwrap();
        let point: Point = action.payload_as().unwrap();
        assert_eq!((point.x, point.y), (1, 2));
    }

    #[test]
    fn test_args_macro() {
        assert!(args![].is_empty());
        assert_eq!(args![1, "a", null], vec![json!(1), json!("a"), Value::Null]);
        assert_eq!(args![-2, { "k": [1, 2] }], vec![json!(-2), json!({"k": [1, 2]})]);
    }
}
