//! Host-side plumbing for super-actions
//!
//! This crate provides:
//! - A synchronous [`Store`] running actions through a [`Middleware`] chain and a reducer
//! - A [`Dispatcher`] queue handle that bound props and middleware dispatch through
//! - Feature [`Module`]s combined into one root reducer by [`combine_modules`]
//! - [`StoreConfig`] loaded from `.super-actions.toml`

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod module;
pub mod store;

pub use config::StoreConfig;
pub use dispatcher::Dispatcher;
pub use error::{Result, StoreError};
pub use middleware::{LoggingMiddleware, Middleware};
pub use module::{combine_modules, CombinedReducer, Module};
pub use store::Store;
