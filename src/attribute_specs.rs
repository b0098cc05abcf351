// Copyright 2025 Cowboy AI, LLC.

//! Attribute specifications
//!
//! One specification per attribute capability. Each is generic over any item
//! type that implements the capability it inspects, so the same
//! `ColorSpecification` logic serves every colored item type.

use std::fmt;
use std::marker::PhantomData;

use crate::attributes::{Color, HasColor, HasSize, Size};
use crate::specification::{DomainConcept, Specification};

/// Satisfied when the candidate's color equals the target color
pub struct ColorSpecification<T> {
    color: Color,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: HasColor> ColorSpecification<T> {
    /// Specification matching items of `color`
    pub fn new(color: Color) -> Self {
        Self {
            color,
            _phantom: PhantomData,
        }
    }

    /// The color this specification compares against
    pub fn target(&self) -> Color {
        self.color
    }
}

impl<T> Clone for ColorSpecification<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColorSpecification<T> {}

impl<T> fmt::Debug for ColorSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSpecification")
            .field("color", &self.color)
            .finish()
    }
}

impl<T> PartialEq for ColorSpecification<T> {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl<T> Eq for ColorSpecification<T> {}

impl<T: HasColor + 'static> DomainConcept for ColorSpecification<T> {}

impl<T: HasColor + 'static> Specification<T> for ColorSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.color() == self.color
    }
}

/// Satisfied when the candidate's size equals the target size
pub struct SizeSpecification<T> {
    size: Size,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: HasSize> SizeSpecification<T> {
    /// Specification matching items of `size`
    pub fn new(size: Size) -> Self {
        Self {
            size,
            _phantom: PhantomData,
        }
    }

    /// The size this specification compares against
    pub fn target(&self) -> Size {
        self.size
    }
}

impl<T> Clone for SizeSpecification<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SizeSpecification<T> {}

impl<T> fmt::Debug for SizeSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeSpecification")
            .field("size", &self.size)
            .finish()
    }
}

impl<T> PartialEq for SizeSpecification<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl<T> Eq for SizeSpecification<T> {}

impl<T: HasSize + 'static> DomainConcept for SizeSpecification<T> {}

impl<T: HasSize + 'static> Specification<T> for SizeSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.size() == self.size
    }
}
