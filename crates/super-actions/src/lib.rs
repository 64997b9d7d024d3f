//! Declarative actions and reducers
//!
//! Declare the shape of an action once and derive its type tag, its creator and
//! its reducer branch from that declaration.
//!
//! - [`create_action_creator`] builds an [`ActionCreator`] from a type tag and an [`ArgSpec`]
//! - [`create_assignment_creator`] additionally attaches an updater merging the payload into state
//! - [`create_action_reducer`] folds a collection of creators into one [`Reducer`]
//! - [`create_map_dispatch_to_props`] binds creators to a host [`Dispatch`] function
//!
//! # Example
//!
//! ```
//! use super_actions::{args, create_action_creator, create_action_reducer, Reducer};
//! use serde_json::{json, Value};
//!
//! let add = create_action_creator("ADD", "x").with_updater(|mut state, action| {
//!     let x = action.field("x").and_then(Value::as_i64).unwrap_or(0);
//!     let value = state["value"].as_i64().unwrap_or(0);
//!     state["value"] = json!(value + x);
//!     state
//! });
//!
//! let reducer = create_action_reducer([add.clone()], None);
//! let state = reducer.reduce(json!({"value": 1}), &add.call(&args![41]));
//! assert_eq!(state, json!({"value": 42}));
//! ```

mod action;
mod arg_spec;
mod bind;
mod creator;
mod error;
mod merge;
mod reducer;

pub use action::{Action, ActionType, Payload, TYPE_KEY};
pub use arg_spec::{ArgSpec, Transform};
pub use bind::{
    create_map_dispatch_to_props, BoundAction, BoundProps, Dispatch, MapDispatchToProps,
};
pub use creator::{create_action_creator, create_assignment_creator, ActionCreator, Updater};
pub use error::{Error, Result};
pub use merge::MergeState;
pub use reducer::{create_action_reducer, ActionReducer, CreatorSet, Reducer};
