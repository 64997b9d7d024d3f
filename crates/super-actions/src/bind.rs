//! Binding action creators to a dispatch function
//!
//! [`create_map_dispatch_to_props`] takes a map of prop name to action creator.
//! Binding it to a dispatch function yields [`BoundProps`]: callables that build
//! the action with the forwarded arguments and hand it to `dispatch` exactly once.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::{Action, ActionType};
use crate::creator::ActionCreator;
use crate::error::{Error, Result};

/// Host-provided sink for dispatched actions
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<F> Dispatch for F
where
    F: Fn(Action),
{
    fn dispatch(&self, action: Action) {
        self(action)
    }
}

type Build = Arc<dyn Fn(&[Value]) -> Action + Send + Sync>;
type SharedDispatch = Arc<dyn Dispatch + Send + Sync>;

/// Action creators keyed by prop name, waiting for a dispatch function
pub struct MapDispatchToProps<S = Value> {
    action_map: BTreeMap<String, ActionCreator<S>>,
}

impl<S: 'static> MapDispatchToProps<S> {
    pub fn new<I, K>(action_map: I) -> Self
    where
        I: IntoIterator<Item = (K, ActionCreator<S>)>,
        K: Into<String>,
    {
        Self {
            action_map: action_map
                .into_iter()
                .map(|(name, creator)| (name.into(), creator))
                .collect(),
        }
    }

    /// Bind every creator to `dispatch`
    pub fn bind<D>(&self, dispatch: D) -> BoundProps
    where
        D: Dispatch + Send + Sync + 'static,
    {
        let dispatch: SharedDispatch = Arc::new(dispatch);
        let props = self
            .action_map
            .iter()
            .map(|(name, creator)| {
                let creator = creator.clone();
                let bound = BoundAction {
                    action_type: creator.action_type().clone(),
                    build: Arc::new(move |args: &[Value]| creator.call(args)),
                    dispatch: Arc::clone(&dispatch),
                };
                (name.clone(), bound)
            })
            .collect();
        BoundProps { props }
    }
}

impl<S> fmt::Debug for MapDispatchToProps<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.action_map
                    .iter()
                    .map(|(name, creator)| (name, creator.action_type())),
            )
            .finish()
    }
}

/// Action creator bound to a dispatch function
#[derive(Clone)]
pub struct BoundAction {
    action_type: ActionType,
    build: Build,
    dispatch: SharedDispatch,
}

impl BoundAction {
    /// Build the action from `args` and dispatch it
    pub fn call(&self, args: &[Value]) {
        self.dispatch.dispatch((self.build)(args));
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }
}

impl fmt::Debug for BoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundAction")
            .field(&self.action_type)
            .finish()
    }
}

/// Bound actions keyed by prop name
#[derive(Debug, Clone)]
pub struct BoundProps {
    props: BTreeMap<String, BoundAction>,
}

impl BoundProps {
    pub fn get(&self, name: &str) -> Option<&BoundAction> {
        self.props.get(name)
    }

    /// Dispatch the action bound under `name`
    pub fn call(&self, name: &str, args: &[Value]) -> Result<()> {
        let bound = self
            .get(name)
            .ok_or_else(|| Error::UnknownProp(name.to_string()))?;
        bound.call(args);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// Prepare a prop map of action creators for binding to a dispatch function
pub fn create_map_dispatch_to_props<S, I, K>(action_map: I) -> MapDispatchToProps<S>
where
    S: 'static,
    I: IntoIterator<Item = (K, ActionCreator<S>)>,
    K: Into<String>,
{
    MapDispatchToProps::new(action_map)
}
