//! Todo list feature module

use serde_json::{json, Value};
use super_actions::{
    create_action_creator, create_action_reducer, create_assignment_creator, Action,
    ActionCreator, ArgSpec, Payload,
};
use super_actions_store::Module;

pub const NAME: &str = "todos";

/// Action creators of the todos module
pub struct TodoActions {
    pub add: ActionCreator,
    pub toggle: ActionCreator,
    pub set_filter: ActionCreator,
}

/// Builds `{"todo": {"text": .., "done": false}}` from the first argument
fn new_todo(args: &[Value]) -> Payload {
    let text = args.first().cloned().unwrap_or_else(|| json!(""));
    let mut payload = Payload::new();
    payload.insert("todo".to_string(), json!({"text": text, "done": false}));
    payload
}

fn add_todo(mut state: Value, action: &Action) -> Value {
    let Some(todo) = action.field("todo").cloned() else {
        return state;
    };
    match state.as_object_mut() {
        Some(fields) => match fields.get_mut("items").and_then(Value::as_array_mut) {
            Some(items) => items.push(todo),
            None => {
                fields.insert("items".to_string(), json!([todo]));
            }
        },
        None => log::warn!("Todo state is not an object, ignoring {}", action.action_type()),
    }
    state
}

fn toggle_todo(mut state: Value, action: &Action) -> Value {
    let index = match action.field_as::<usize>("index") {
        Ok(index) => index,
        Err(e) => {
            log::warn!("Ignoring toggle: {}", e);
            return state;
        }
    };
    let todo = state
        .get_mut("items")
        .and_then(|items| items.get_mut(index))
        .and_then(Value::as_object_mut);
    match todo {
        Some(todo) => {
            let done = todo.get("done").and_then(Value::as_bool).unwrap_or(false);
            todo.insert("done".to_string(), json!(!done));
        }
        None => log::debug!("No todo at index {}, nothing to toggle", index),
    }
    state
}

impl TodoActions {
    pub fn new() -> Self {
        Self {
            add: create_action_creator("TODO_ADD", ArgSpec::transform(new_todo))
                .with_updater(add_todo),
            toggle: create_action_creator("TODO_TOGGLE", "index").with_updater(toggle_todo),
            set_filter: create_assignment_creator("TODO_SET_FILTER", "filter"),
        }
    }

    fn all(&self) -> Vec<(&'static str, ActionCreator)> {
        vec![
            ("add", self.add.clone()),
            ("toggle", self.toggle.clone()),
            ("set_filter", self.set_filter.clone()),
        ]
    }
}

impl Default for TodoActions {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_state() -> Value {
    json!({"items": [], "filter": "all"})
}

pub fn module(actions: &TodoActions) -> Module {
    Module::new(NAME).with_reducer(create_action_reducer(actions.all(), Some(initial_state())))
}
