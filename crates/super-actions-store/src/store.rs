use std::sync::mpsc::{self, Receiver};

use serde_json::Value;
use super_actions::{Action, MergeState, Reducer};

use crate::config::StoreConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::module::CombinedReducer;

/// Store - holds the current state and runs the dispatch loop
///
/// Every dispatched action passes the middleware chain, then the reducer.
/// Actions queued through the [`Dispatcher`] meanwhile are processed right after,
/// in the order they were queued.
pub struct Store<S> {
    state: S,
    reducer: Box<dyn Reducer<S> + Send>,
    middleware: Vec<Box<dyn Middleware<S>>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl<S: Clone> Store<S> {
    pub fn new(reducer: impl Reducer<S> + Send + 'static, initial_state: S) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            reducer: Box::new(reducer),
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store; middleware runs in the order it was added
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S>>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher feeding the pending queue
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = self.reducer.reduce(self.state.clone(), &action);
        } else {
            log::debug!("Action {} consumed by middleware", action.action_type());
        }

        self.process_pending();
    }

    /// Dispatch every action queued through the dispatcher
    pub fn process_pending(&mut self) {
        let pending: Vec<Action> = self.pending.try_iter().collect();
        for action in pending {
            self.dispatch(action);
        }
    }
}

impl Store<Value> {
    /// Build a JSON-state store from configuration
    pub fn from_config(
        reducer: impl Reducer<Value> + Send + 'static,
        config: &StoreConfig,
    ) -> Result<Self> {
        Ok(Self::with_config(reducer, config.initial_state()?, config))
    }

    /// Build a store over combined modules
    ///
    /// The store starts from every module's initial state. Root keys present in
    /// the configured initial state replace the corresponding module slice.
    pub fn from_modules(reducer: CombinedReducer, config: &StoreConfig) -> Result<Self> {
        let initial_state = match config.initial_state()? {
            Value::Object(configured) => reducer.initial_state().merge_payload(&configured),
            _ => reducer.initial_state(),
        };
        Ok(Self::with_config(reducer, initial_state, config))
    }

    fn with_config(
        reducer: impl Reducer<Value> + Send + 'static,
        initial_state: Value,
        config: &StoreConfig,
    ) -> Self {
        let mut store = Self::new(reducer, initial_state);
        if config.log_actions {
            store.add_middleware(Box::new(LoggingMiddleware::new()));
        }
        store
    }
}
