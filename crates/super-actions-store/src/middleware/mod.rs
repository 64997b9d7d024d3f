//! Middleware chain
//!
//! Middleware sits between dispatch and the reducer:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can inspect the action and the current state, queue further
//! actions via the [`Dispatcher`], or consume the action so it never reaches
//! the reducer.

use super_actions::Action;

use crate::dispatcher::Dispatcher;

mod logging;

pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware<S>: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only snapshot)
    /// - `dispatcher`: Use to queue actions that should re-enter the middleware chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &S, dispatcher: &Dispatcher) -> bool;
}
