//! Shallow merge of payload fields into state
//!
//! Used by assignment creators. The merge is one level deep and the payload
//! wins on key collision; fields of the state not named in the payload survive.

use serde_json::Value;

use crate::action::Payload;

/// State shapes an assignment updater can write payload fields into
pub trait MergeState: Sized {
    fn merge_payload(self, payload: &Payload) -> Self;
}

impl MergeState for Payload {
    fn merge_payload(mut self, payload: &Payload) -> Self {
        for (name, value) in payload {
            self.insert(name.clone(), value.clone());
        }
        self
    }
}

impl MergeState for Value {
    /// Null is treated as an empty object. Any other non-object state is replaced.
    fn merge_payload(self, payload: &Payload) -> Self {
        match self {
            Value::Object(fields) => Value::Object(fields.merge_payload(payload)),
            Value::Null => Value::Object(payload.clone()),
            other => {
                log::debug!("Replacing non-object state {} with assigned fields", other);
                Value::Object(payload.clone())
            }
        }
    }
}
