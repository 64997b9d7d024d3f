//! Action creators
//!
//! An [`ActionCreator`] is a callable record: invoking it with positional
//! arguments yields an [`Action`], and it exposes its type tag and an optional
//! state updater as metadata. The updater is never run by the creator itself;
//! [`ActionReducer`](crate::ActionReducer) picks it up when building its dispatch table.
//!
//! ```
//! use super_actions::{args, create_action_creator};
//! use serde_json::json;
//!
//! let add = create_action_creator("ADD", "x");
//! assert_eq!(add.action_type(), "ADD");
//! assert_eq!(add.call(&args![10]).to_value(), json!({"type": "ADD", "x": 10}));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::{Action, ActionType};
use crate::arg_spec::{ArgSpec, PayloadBuilder};
use crate::merge::MergeState;

/// State-update function attached to an action creator
pub type Updater<S> = Arc<dyn Fn(S, &Action) -> S + Send + Sync>;

/// Callable producing actions of one type, carrying that type and an optional updater
pub struct ActionCreator<S = Value> {
    action_type: ActionType,
    build: PayloadBuilder,
    updater: Option<Updater<S>>,
}

impl<S> ActionCreator<S> {
    /// Create an action creator without an updater
    pub fn new(action_type: impl Into<ActionType>, arg_spec: impl Into<ArgSpec>) -> Self {
        Self {
            action_type: action_type.into(),
            build: arg_spec.into().resolve(),
            updater: None,
        }
    }

    /// Attach the state-update function used when a reducer matches this creator's type
    pub fn with_updater<F>(mut self, updater: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.updater = Some(Arc::new(updater));
        self
    }

    /// Create an action creator whose updater assigns the payload fields into state
    pub fn assignment(action_type: impl Into<ActionType>, arg_spec: impl Into<ArgSpec>) -> Self
    where
        S: MergeState + 'static,
    {
        Self::new(action_type, arg_spec)
            .with_updater(|state: S, action: &Action| state.merge_payload(action.payload()))
    }

    /// Build an action from positional arguments
    pub fn call(&self, args: &[Value]) -> Action {
        Action::with_payload(self.action_type.clone(), (self.build)(args))
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn updater(&self) -> Option<&Updater<S>> {
        self.updater.as_ref()
    }

    /// Whether the action carries this creator's type tag
    pub fn matches(&self, action: &Action) -> bool {
        action.action_type() == &self.action_type
    }
}

impl<S> Clone for ActionCreator<S> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            build: Arc::clone(&self.build),
            updater: self.updater.clone(),
        }
    }
}

impl<S> fmt::Debug for ActionCreator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .field("updater", &self.updater.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Create an action creator over JSON state
///
/// Attach an updater with [`ActionCreator::with_updater`].
pub fn create_action_creator(
    action_type: impl Into<ActionType>,
    arg_spec: impl Into<ArgSpec>,
) -> ActionCreator {
    ActionCreator::new(action_type, arg_spec)
}

/// Create an action creator whose updater merges the payload into JSON state
pub fn create_assignment_creator(
    action_type: impl Into<ActionType>,
    arg_spec: impl Into<ArgSpec>,
) -> ActionCreator {
    ActionCreator::assignment(action_type, arg_spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Payload;
    use crate::args;
    use serde_json::json;

    #[test]
    fn test_creator_without_arguments() {
        let action = create_action_creator("ACTION", ArgSpec::None);
        assert_eq!(action.action_type(), "ACTION");
        assert_eq!(action.call(&[]).to_value(), json!({"type": "ACTION"}));
        assert_eq!(action.call(&args![1, 2]).to_value(), json!({"type": "ACTION"}));
    }

    #[test]
    fn test_creator_type_matches_produced_actions() {
        let action = create_action_creator("ACTION", ["a"]);
        let produced = action.call(&args!["x"]);
        assert_eq!(produced.action_type(), action.action_type());
        assert!(action.matches(&produced));
        assert!(!action.matches(&Action::new("OTHER")));
    }

    #[test]
    fn test_creator_without_updater() {
        let action = create_action_creator("ACTION", "a");
        assert!(action.updater().is_none());
        assert!(format!("{:?}", action).contains("updater: None"));
    }

    #[test]
    fn test_with_updater_is_not_invoked_by_creator() {
        let action = create_action_creator("ACTION", "a")
            .with_updater(|_state, _action| panic!("updater must not run on call"));
        assert!(action.updater().is_some());
        assert_eq!(
            action.call(&args![1]).to_value(),
            json!({"type": "ACTION", "a": 1})
        );
    }

    #[test]
    fn test_transform_payload_cannot_override_type() {
        let action = create_action_creator(
            "ACTION",
            ArgSpec::transform(|_| {
                let mut payload = Payload::new();
                payload.insert("type".to_string(), json!("HIJACKED"));
                payload
            }),
        );
        assert_eq!(action.call(&[]).to_value(), json!({"type": "ACTION"}));
    }

    #[test]
    fn test_assignment_creator_attaches_merge_updater() {
        let assign = create_assignment_creator("ASSIGN", ["a"]);
        let updater = assign.updater().expect("assignment creator has an updater");

        let state = updater(json!({"b": 2}), &assign.call(&args![1]));
        assert_eq!(state, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_assignment_creator_for_payload_state() {
        let assign = ActionCreator::<Payload>::assignment("ASSIGN", "a");
        let updater = assign.updater().unwrap();

        let state = updater(Payload::new(), &assign.call(&args!["v"]));
        assert_eq!(state.get("a"), Some(&json!("v")));
    }

    #[test]
    fn test_cloned_creator_shares_behavior() {
        let original = create_assignment_creator("ASSIGN", "a");
        let copy = original.clone();
        assert_eq!(copy.action_type(), original.action_type());
        assert_eq!(copy.call(&args![5]), original.call(&args![5]));
        assert!(copy.updater().is_some());
    }
}
