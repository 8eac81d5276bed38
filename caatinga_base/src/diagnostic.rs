//! A module for collecting the diagnostics reported while analyzing a source file.

use std::{
    cell::Cell,
    sync::{RwLock, RwLockReadGuard},
};

/// Represents a trait responsible for handling diagnostics in the front end.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics in a vector.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of diagnostics.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner().unwrap() }

    /// Returns a reference to the underlying vector of diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<'_, Vec<T>> { self.diagnostics.read().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.diagnostics.write().unwrap().push(diagnostic.into()); }
}

/// Is a struct that implements [`Handler`] trait by doing nothing with the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _diagnostic: T) {}
}

/// Is a [`Handler`] that counts the diagnostics it receives before forwarding them to the wrapped
/// handler.
#[derive(Debug, Default)]
pub struct Counting<H> {
    inner: H,
    count: Cell<usize>,
}

impl<H> Counting<H> {
    /// Wraps the given handler with a counter starting at zero.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    /// Returns the number of diagnostics received so far.
    #[must_use]
    pub fn count(&self) -> usize { self.count.get() }

    /// Gets the wrapped handler.
    #[must_use]
    pub fn inner(&self) -> &H { &self.inner }
}

impl<T, H: Handler<T>> Handler<T> for Counting<H> {
    fn receive(&self, diagnostic: T) {
        self.count.set(self.count.get() + 1);
        self.inner.receive(diagnostic);
    }
}
