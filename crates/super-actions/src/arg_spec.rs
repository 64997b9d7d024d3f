//! Argument specifications
//!
//! An [`ArgSpec`] declares how the positional arguments of an action creator map
//! onto payload fields. It is resolved once, when the creator is built, into a
//! single payload builder; calls never re-inspect the spec.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Payload;

/// Caller-supplied function turning positional arguments into payload fields
pub type Transform = Arc<dyn Fn(&[Value]) -> Payload + Send + Sync>;

/// Resolved form of an [`ArgSpec`]
pub(crate) type PayloadBuilder = Arc<dyn Fn(&[Value]) -> Payload + Send + Sync>;

/// How positional call arguments become payload fields
#[derive(Clone, Default)]
pub enum ArgSpec {
    /// No arguments; the action carries only its type tag
    #[default]
    None,
    /// One argument stored under the given field name
    Field(String),
    /// Arguments paired with the names at the same position
    Fields(Vec<String>),
    /// Arguments handed to a function producing the payload
    Transform(Transform),
}

impl ArgSpec {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn fields<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }

    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Payload + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(f))
    }

    /// Collapse the spec into the closure an action creator calls
    ///
    /// Missing arguments leave their field out, extra arguments are ignored.
    pub(crate) fn resolve(self) -> PayloadBuilder {
        match self {
            Self::None => Arc::new(|_: &[Value]| Payload::new()),
            Self::Field(name) => Arc::new(move |args: &[Value]| {
                let mut payload = Payload::new();
                if let Some(value) = args.first() {
                    payload.insert(name.clone(), value.clone());
                }
                payload
            }),
            Self::Fields(names) => Arc::new(move |args: &[Value]| {
                names
                    .iter()
                    .zip(args)
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect()
            }),
            Self::Transform(transform) => transform,
        }
    }
}

impl fmt::Debug for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Fields(names) => f.debug_tuple("Fields").field(names).finish(),
            Self::Transform(_) => write!(f, "Transform(<fn>)"),
        }
    }
}

impl From<&str> for ArgSpec {
    fn from(name: &str) -> Self {
        Self::field(name)
    }
}

impl From<String> for ArgSpec {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<Vec<String>> for ArgSpec {
    fn from(names: Vec<String>) -> Self {
        Self::Fields(names)
    }
}

impl From<Vec<&str>> for ArgSpec {
    fn from(names: Vec<&str>) -> Self {
        Self::fields(names)
    }
}

impl<const N: usize> From<[&str; N]> for ArgSpec {
    fn from(names: [&str; N]) -> Self {
        Self::fields(names)
    }
}

impl From<&[&str]> for ArgSpec {
    fn from(names: &[&str]) -> Self {
        Self::fields(names.iter().copied())
    }
}
