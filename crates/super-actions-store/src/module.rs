//! Feature modules and their composition into one root reducer
//!
//! Every module owns the slice of the root state stored under its name:
//!
//! ```text
//! {"counter": <counter slice>, "todos": <todos slice>}
//! ```

use std::collections::HashSet;

use serde_json::{Map, Value};
use super_actions::{Action, ActionReducer, Reducer};

use crate::error::{Result, StoreError};

/// A named feature module
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    reducer: Option<ActionReducer>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reducer: None,
        }
    }

    pub fn with_reducer(mut self, reducer: ActionReducer) -> Self {
        self.reducer = Some(reducer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reducer(&self) -> Option<&ActionReducer> {
        self.reducer.as_ref()
    }
}

/// Root reducer delegating each state slice to the module that owns it
#[derive(Debug, Clone)]
pub struct CombinedReducer {
    slices: Vec<(String, ActionReducer)>,
}

impl CombinedReducer {
    /// Names of the modules that own a slice, in registration order
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(name, _)| name.as_str())
    }

    /// Root state made of every module's initial state
    pub fn initial_state(&self) -> Value {
        let root = self
            .slices
            .iter()
            .map(|(name, reducer)| {
                let slice = reducer.initial_state().cloned().unwrap_or_default();
                (name.clone(), slice)
            })
            .collect();
        Value::Object(root)
    }
}

impl Reducer<Value> for CombinedReducer {
    fn reduce(&self, state: Value, action: &Action) -> Value {
        let mut root = match state {
            Value::Object(root) => root,
            Value::Null => Map::new(),
            other => {
                log::warn!("Root state is not an object, discarding {}", other);
                Map::new()
            }
        };

        for (name, reducer) in &self.slices {
            match root.get_mut(name) {
                Some(slice) => {
                    let current = std::mem::take(slice);
                    *slice = reducer.reduce(current, action);
                }
                None => {
                    let slice = reducer.reduce_or_init(None, action);
                    root.insert(name.clone(), slice);
                }
            }
        }

        Value::Object(root)
    }
}

/// Combine feature modules into one root reducer
///
/// Modules without a reducer are skipped. Two modules with the same name are an error.
pub fn combine_modules(modules: impl IntoIterator<Item = Module>) -> Result<CombinedReducer> {
    let mut seen = HashSet::new();
    let mut slices = Vec::new();

    for module in modules {
        if !seen.insert(module.name.clone()) {
            return Err(StoreError::DuplicateModule(module.name));
        }
        match module.reducer {
            Some(reducer) => slices.push((module.name, reducer)),
            None => log::debug!("Module '{}' has no reducer, skipping", module.name),
        }
    }

    log::debug!("Combined {} module reducers", slices.len());
    Ok(CombinedReducer { slices })
}
