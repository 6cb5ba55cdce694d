//! Property selectors shared by every node of a rule chain.

use std::fmt;
use std::sync::Arc;

/// Pure function extracting the value under validation from an object.
///
/// Cloning a selector shares the underlying function, so every node derived
/// from one chain root refers to the same selector. [`same_as`] compares that
/// identity.
///
/// [`same_as`]: PropertySelector::same_as
pub struct PropertySelector<T, P> {
    select: Arc<dyn Fn(&T) -> P + Send + Sync>,
}

impl<T, P> PropertySelector<T, P> {
    pub fn new<F>(select: F) -> Self
    where
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        Self {
            select: Arc::new(select),
        }
    }

    /// Extract the property from `object`.
    ///
    /// Panics raised by the selector propagate to the caller.
    pub fn select(&self, object: &T) -> P {
        (self.select)(object)
    }

    /// Whether both selectors share the same underlying function.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.select, &other.select)
    }
}

impl<T, P> Clone for PropertySelector<T, P> {
    fn clone(&self) -> Self {
        Self {
            select: Arc::clone(&self.select),
        }
    }
}

impl<T, P> fmt::Debug for PropertySelector<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySelector")
            .field("select", &Arc::as_ptr(&self.select))
            .finish()
    }
}
