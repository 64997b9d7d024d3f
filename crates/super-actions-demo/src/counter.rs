//! Counter feature module

use serde_json::{json, Value};
use super_actions::{
    create_action_creator, create_action_reducer, create_assignment_creator, ActionCreator,
    ArgSpec,
};
use super_actions_store::Module;

pub const NAME: &str = "counter";

/// Action creators of the counter module
pub struct CounterActions {
    pub increment: ActionCreator,
    pub decrement: ActionCreator,
    pub set_label: ActionCreator,
    pub reset: ActionCreator,
}

fn shift_by(sign: i64) -> impl Fn(Value, &super_actions::Action) -> Value + Send + Sync {
    move |mut state: Value, action: &super_actions::Action| {
        let by = action.field("by").and_then(Value::as_i64).unwrap_or(1);
        match state.as_object_mut() {
            Some(fields) => {
                let value = fields.get("value").and_then(Value::as_i64).unwrap_or(0);
                fields.insert(
                    "value".to_string(),
                    json!(value.saturating_add(sign.saturating_mul(by))),
                );
            }
            None => log::warn!("Counter state is not an object, ignoring {}", action.action_type()),
        }
        state
    }
}

impl CounterActions {
    pub fn new() -> Self {
        Self {
            increment: create_action_creator("COUNTER_INCREMENT", "by").with_updater(shift_by(1)),
            decrement: create_action_creator("COUNTER_DECREMENT", "by").with_updater(shift_by(-1)),
            set_label: create_assignment_creator("COUNTER_SET_LABEL", "label"),
            reset: create_action_creator("COUNTER_RESET", ArgSpec::None)
                .with_updater(|_, _| initial_state()),
        }
    }

    fn all(&self) -> [ActionCreator; 4] {
        [
            self.increment.clone(),
            self.decrement.clone(),
            self.set_label.clone(),
            self.reset.clone(),
        ]
    }
}

impl Default for CounterActions {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_state() -> Value {
    json!({"value": 0, "label": "clicks"})
}

pub fn module(actions: &CounterActions) -> Module {
    Module::new(NAME).with_reducer(create_action_reducer(actions.all(), Some(initial_state())))
}
