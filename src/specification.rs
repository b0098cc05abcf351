// Copyright 2025 Cowboy AI, LLC.

//! Specification pattern
//!
//! A specification is a reusable predicate over a candidate type `T`.
//! Specifications compose with [`Specification::and`] into an
//! [`AndSpecification`], which is itself a specification, so conjunctions of
//! any depth are built by nesting.
//!
//! Every operand of a composite judges the same `T`. Mixing item types is
//! rejected by the compiler:
//!
//! ```compile_fail
//! use cim_specification::{Color, ColorSpecification, HasColor, HasSize, Size, SizeSpecification, Specification};
//!
//! struct Apple { color: Color }
//! impl HasColor for Apple {
//!     fn color(&self) -> Color { self.color }
//!     fn set_color(&mut self, color: Color) { self.color = color; }
//! }
//!
//! struct Crate { size: Size }
//! impl HasSize for Crate {
//!     fn size(&self) -> Size { self.size }
//!     fn set_size(&mut self, size: Size) { self.size = size; }
//! }
//!
//! let red = ColorSpecification::<Apple>::new(Color::Red);
//! let small = SizeSpecification::<Crate>::new(Size::Small);
//! let _mixed = red.and(small);
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

// ============================================================================
// MARKER TRAIT
// ============================================================================

/// Root trait for all domain concepts
pub trait DomainConcept: Send + Sync + 'static {}

// ============================================================================
// SPECIFICATION
// ============================================================================

/// Specification pattern: a composable predicate over `T`
///
/// Implementations must be pure: evaluation never mutates the candidate or
/// the specification, and the same candidate always yields the same answer.
pub trait Specification<T>: DomainConcept {
    /// Check if the specification is satisfied
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Combine with another specification using AND
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<T, Self, S>
    where
        Self: Sized,
    {
        AndSpecification::new(self, other)
    }
}

/// AND combination of specifications
///
/// The left operand is evaluated first; the right operand is only consulted
/// when the left one is satisfied.
pub struct AndSpecification<T, L, R> {
    left: L,
    right: R,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, L, R> AndSpecification<T, L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    /// Conjunction of `left` and `right`
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            _phantom: PhantomData,
        }
    }

    /// Left operand
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Right operand
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<T, L: Clone, R: Clone> Clone for AndSpecification<T, L, R> {
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, L: Debug, R: Debug> Debug for AndSpecification<T, L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndSpecification")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T, L, R> DomainConcept for AndSpecification<T, L, R>
where
    T: 'static,
    L: Specification<T>,
    R: Specification<T>,
{
}

impl<T, L, R> Specification<T> for AndSpecification<T, L, R>
where
    T: 'static,
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}
