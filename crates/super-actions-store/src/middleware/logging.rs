use super_actions::Action;

use super::Middleware;
use crate::dispatcher::Dispatcher;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Middleware<S> for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &S, _dispatcher: &Dispatcher) -> bool {
        log::debug!("Action: {}", action.to_value());
        true // Always pass action through
    }
}
