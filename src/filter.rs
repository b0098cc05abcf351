// Copyright 2025 Cowboy AI, LLC.

//! Filtering collections by specification
//!
//! A filter decides how a collection is scanned; the specification decides
//! what matters. `GenericFilter` performs a single forward pass and keeps the
//! accepted items in encounter order.

use std::marker::PhantomData;

use tracing::debug;

use crate::specification::Specification;

/// Selects the items of a collection that satisfy a specification
pub trait Filter {
    /// The item type this filter scans
    type Item;

    /// Return the accepted items, preserving their relative order
    fn filter<S>(&self, items: &[Self::Item], spec: &S) -> Vec<Self::Item>
    where
        S: Specification<Self::Item>;
}

/// Stateless filter usable with any item type and any specification over it
pub struct GenericFilter<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> GenericFilter<T> {
    /// Create a filter
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for GenericFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GenericFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GenericFilter<T> {}

impl<T> std::fmt::Debug for GenericFilter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GenericFilter")
    }
}

impl<T: Clone> Filter for GenericFilter<T> {
    type Item = T;

    fn filter<S>(&self, items: &[T], spec: &S) -> Vec<T>
    where
        S: Specification<T>,
    {
        let mut output = Vec::new();
        for item in items {
            if spec.is_satisfied_by(item) {
                output.push(item.clone());
            }
        }

        debug!(
            scanned = items.len(),
            accepted = output.len(),
            "Filtered collection by specification"
        );
        output
    }
}

/// Filter `items` with a fresh [`GenericFilter`]
pub fn filter<T, S>(items: &[T], spec: &S) -> Vec<T>
where
    T: Clone,
    S: Specification<T>,
{
    GenericFilter::<T>::new().filter(items, spec)
}
