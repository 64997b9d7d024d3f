//! Error type for the action layer
//!
//! Creating actions and reducing state never fails. Errors only arise when a
//! caller asks for something that is not there (an unbound prop, a missing field)
//! or decodes a payload into a typed value.

use thiserror::Error;

use crate::action::ActionType;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No bound action named '{0}'")]
    UnknownProp(String),

    #[error("Action {action_type} has no field '{field}'")]
    MissingField {
        action_type: ActionType,
        field: String,
    },

    #[error("Failed to decode payload of {action_type}: {source}")]
    Decode {
        action_type: ActionType,
        #[source]
        source: serde_json::Error,
    },
}
