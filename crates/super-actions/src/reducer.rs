//! Reducers built from action creators
//!
//! [`create_action_reducer`] turns a collection of action creators into one
//! reducing function. Each creator contributes a dispatch-table entry from its
//! type tag to its updater; actions with an unknown type leave state untouched.
//!
//! ```text
//! (state, action) → table[action.type] → updater(state, action) → state'
//!                          └─ no entry / no updater → state
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;

use crate::action::{Action, ActionType};
use crate::creator::{ActionCreator, Updater};

/// Pure function folding an action into a new state value
pub trait Reducer<S> {
    fn reduce(&self, state: S, action: &Action) -> S;
}

impl<S, F> Reducer<S> for F
where
    F: Fn(S, &Action) -> S,
{
    fn reduce(&self, state: S, action: &Action) -> S {
        self(state, action)
    }
}

/// Ordered sequence of action creators handed to [`create_action_reducer`]
///
/// Both plain sequences and ordered keyed collections (pair lists, `BTreeMap`)
/// convert into it. Keys only exist for call-site readability and are dropped
/// here; the iteration order of the input is the registration order.
pub struct CreatorSet<S = Value> {
    creators: Vec<ActionCreator<S>>,
}

impl<S> CreatorSet<S> {
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl<S> From<Vec<ActionCreator<S>>> for CreatorSet<S> {
    fn from(creators: Vec<ActionCreator<S>>) -> Self {
        Self { creators }
    }
}

impl<S> From<&[ActionCreator<S>]> for CreatorSet<S> {
    fn from(creators: &[ActionCreator<S>]) -> Self {
        Self {
            creators: creators.to_vec(),
        }
    }
}

impl<S, const N: usize> From<[ActionCreator<S>; N]> for CreatorSet<S> {
    fn from(creators: [ActionCreator<S>; N]) -> Self {
        Self {
            creators: creators.into(),
        }
    }
}

impl<K, S> From<Vec<(K, ActionCreator<S>)>> for CreatorSet<S> {
    fn from(entries: Vec<(K, ActionCreator<S>)>) -> Self {
        entries.into_iter().map(|(_, creator)| creator).collect()
    }
}

impl<K, S, const N: usize> From<[(K, ActionCreator<S>); N]> for CreatorSet<S> {
    fn from(entries: [(K, ActionCreator<S>); N]) -> Self {
        entries.into_iter().map(|(_, creator)| creator).collect()
    }
}

impl<K, S> From<BTreeMap<K, ActionCreator<S>>> for CreatorSet<S> {
    fn from(entries: BTreeMap<K, ActionCreator<S>>) -> Self {
        entries.into_values().collect()
    }
}

impl<S> FromIterator<ActionCreator<S>> for CreatorSet<S> {
    fn from_iter<I: IntoIterator<Item = ActionCreator<S>>>(iter: I) -> Self {
        Self {
            creators: iter.into_iter().collect(),
        }
    }
}

/// Reducer dispatching on action type to the updaters of its creators
pub struct ActionReducer<S = Value> {
    table: HashMap<ActionType, Option<Updater<S>>>,
    initial_state: Option<S>,
}

impl<S> ActionReducer<S> {
    pub fn new(creators: impl Into<CreatorSet<S>>, initial_state: Option<S>) -> Self {
        let creators = creators.into();
        let mut table = HashMap::with_capacity(creators.len());

        for creator in creators.creators {
            let action_type = creator.action_type().clone();
            let updater = creator.updater().cloned();
            if table.insert(action_type.clone(), updater).is_some() {
                // Last registration wins
                log::debug!("Duplicate action type {} in reducer, replacing", action_type);
            }
        }

        log::debug!("Built action reducer with {} action types", table.len());
        Self {
            table,
            initial_state,
        }
    }

    /// Whether an action of this type reaches an updater
    pub fn handles(&self, action_type: &str) -> bool {
        matches!(self.table.get(action_type), Some(Some(_)))
    }

    /// All registered type tags, including those without an updater
    pub fn action_types(&self) -> impl Iterator<Item = &ActionType> {
        self.table.keys()
    }

    pub fn initial_state(&self) -> Option<&S> {
        self.initial_state.as_ref()
    }

    /// Reduce, starting from the initial state when no state is supplied
    ///
    /// Falls back to `S::default()` if the reducer was built without an initial state.
    pub fn reduce_or_init(&self, state: Option<S>, action: &Action) -> S
    where
        S: Clone + Default,
    {
        let state = state
            .or_else(|| self.initial_state.clone())
            .unwrap_or_default();
        self.reduce(state, action)
    }
}

impl<S> Reducer<S> for ActionReducer<S> {
    fn reduce(&self, state: S, action: &Action) -> S {
        match self.table.get(action.action_type()) {
            Some(Some(updater)) => updater(state, action),
            _ => state,
        }
    }
}

impl<S: Clone> Clone for ActionReducer<S> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            initial_state: self.initial_state.clone(),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for ActionReducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut action_types: Vec<_> = self.table.keys().collect();
        action_types.sort();
        f.debug_struct("ActionReducer")
            .field("action_types", &action_types)
            .field("initial_state", &self.initial_state)
            .finish()
    }
}

/// Build a reducer from a sequence or keyed collection of action creators
pub fn create_action_reducer<S>(
    creators: impl Into<CreatorSet<S>>,
    initial_state: Option<S>,
) -> ActionReducer<S> {
    ActionReducer::new(creators, initial_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::creator::{create_action_creator, create_assignment_creator};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn counter(action_type: &str, sign: i64) -> ActionCreator {
        create_action_creator(action_type, "x").with_updater(move |mut state, action| {
            let x = action.field("x").and_then(Value::as_i64).unwrap_or(0);
            let value = state["value"].as_i64().unwrap_or(0);
            state["value"] = json!(value + sign * x);
            state
        })
    }

    #[test]
    fn test_unmatched_action_is_identity() {
        let reducer = create_action_reducer(vec![counter("ADD", 1)], None);
        let state = json!({"a": 1});
        assert_eq!(reducer.reduce(state.clone(), &Action::new("UNKNOWN")), state);
    }

    #[test]
    fn test_creator_without_updater_is_noop() {
        let ping = create_action_creator("PING", crate::ArgSpec::None);
        let reducer = create_action_reducer([ping.clone()], None);

        let state = json!({"a": 1});
        assert_eq!(reducer.reduce(state.clone(), &ping.call(&[])), state);
        assert!(!reducer.handles("PING"));
        assert_eq!(reducer.action_types().count(), 1);
    }

    #[test]
    fn test_duplicate_type_last_registered_wins() {
        let first = create_action_creator("SET", "v").with_updater(|_, _| json!("first"));
        let second = create_action_creator("SET", "v").with_updater(|_, _| json!("second"));
        let reducer = create_action_reducer([first, second.clone()], None);

        assert_eq!(reducer.reduce(Value::Null, &second.call(&args![1])), json!("second"));
    }

    #[test]
    fn test_keyed_entries_are_normalized() {
        let add = counter("ADD", 1);
        let keyed: BTreeMap<&str, ActionCreator> = [("add", add.clone())].into();
        let from_map = create_action_reducer(keyed, None);
        let from_pairs = create_action_reducer([("add", add.clone())], None);

        let action = add.call(&args![3]);
        assert_eq!(from_map.reduce(json!({"value": 1}), &action), json!({"value": 4}));
        assert_eq!(from_pairs.reduce(json!({"value": 1}), &action), json!({"value": 4}));
    }

    #[test]
    fn test_duplicate_type_in_keyed_input_follows_key_order() {
        let a = create_action_creator("SET", "v").with_updater(|_, _| json!("a"));
        let b = create_action_creator("SET", "v").with_updater(|_, _| json!("b"));
        let action = a.call(&args![1]);

        // BTreeMap iterates by key, so "second" registers after "first"
        let keyed: BTreeMap<&str, ActionCreator> =
            [("second", b.clone()), ("first", a.clone())].into();
        for _ in 0..10 {
            let reducer = create_action_reducer(keyed.clone(), None);
            assert_eq!(reducer.reduce(Value::Null, &action), json!("b"));
        }

        // Pair lists keep their written order
        let reducer = create_action_reducer([("x", b), ("y", a)], None);
        assert_eq!(reducer.reduce(Value::Null, &action), json!("a"));
    }

    #[test]
    fn test_reduce_or_init_defaults() {
        let assign = create_assignment_creator("ASSIGN", "a");
        let without_initial = create_action_reducer([assign.clone()], None);
        assert_eq!(
            without_initial.reduce_or_init(None, &assign.call(&args![1])),
            json!({"a": 1})
        );

        let with_initial = create_action_reducer([assign.clone()], Some(json!({"b": 2})));
        assert_eq!(
            with_initial.reduce_or_init(None, &assign.call(&args![1])),
            json!({"a": 1, "b": 2})
        );
        // Supplied state takes precedence over the initial state
        assert_eq!(
            with_initial.reduce_or_init(Some(json!({})), &assign.call(&args![1])),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_closures_are_reducers() {
        let double = |state: i64, _action: &Action| state * 2;
        assert_eq!(double.reduce(21, &Action::new("ANY")), 42);
    }

    #[test]
    fn test_typed_state() {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Counter {
            value: i64,
        }

        let increment = ActionCreator::<Counter>::new("INCREMENT", "by").with_updater(
            |state: Counter, action: &Action| Counter {
                value: state.value + action.field_as::<i64>("by").unwrap_or(1),
            },
        );
        let reducer = create_action_reducer([increment.clone()], Some(Counter { value: 10 }));

        let state = reducer.reduce_or_init(None, &increment.call(&args![5]));
        assert_eq!(state, Counter { value: 15 });
        let state = reducer.reduce(state, &increment.call(&[]));
        assert_eq!(state, Counter { value: 16 });
    }
}
