//! Typed provider/consumer pairs for compound components.
//!
//! A compound root (for example [`crate::CheckboxGroup`] or [`crate::card::CardRoot`]) owns a
//! [`ScopedContext`] descriptor and registers its per-instance bundle with
//! [`ScopedContext::provide`]. Leaves read it back with [`ScopedContext::lookup`], which returns a
//! [`ContextError`] naming the required root when no provider encloses the caller. Leaves that
//! cannot render without their root call [`ScopedContext::require`] and fail fast.

use std::marker::PhantomData;

use leptos::*;
use thiserror::Error;

/// Failure reading a scoped compound-component context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The consumer was rendered outside any provider of the required scope.
    #[error("{consumer} must be used within {scope}")]
    MissingProvider {
        /// Component that attempted the lookup.
        consumer: &'static str,
        /// Root component that must enclose the consumer.
        scope: &'static str,
    },
}

#[derive(Clone)]
struct Scoped<T>(T);

/// Descriptor binding a context payload type to the name of the root that provides it.
pub struct ScopedContext<T: 'static> {
    scope: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ScopedContext<T> {
    /// Creates a descriptor for contexts provided by `scope`.
    pub const fn new(scope: &'static str) -> Self {
        Self {
            scope,
            marker: PhantomData,
        }
    }

    /// Name of the root component that provides this context.
    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl<T: Clone + 'static> ScopedContext<T> {
    /// Registers `value` for every descendant of the current reactive owner.
    pub fn provide(&self, value: T) {
        provide_context(Scoped(value));
    }

    /// Returns the nearest enclosing provider's value.
    pub fn lookup(&self, consumer: &'static str) -> Result<T, ContextError> {
        use_context::<Scoped<T>>()
            .map(|Scoped(value)| value)
            .ok_or(ContextError::MissingProvider {
                consumer,
                scope: self.scope,
            })
    }

    /// Returns the nearest enclosing provider's value.
    ///
    /// # Panics
    ///
    /// Panics with the [`ContextError`] message when `consumer` is rendered outside its root.
    #[track_caller]
    pub fn require(&self, consumer: &'static str) -> T {
        match self.lookup(consumer) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
