// Copyright 2025 Cowboy AI, LLC.

//! # CIM Specification
//!
//! Composable predicates ("specifications") over typed items, and generic
//! filtering of collections with them.
//!
//! This crate provides:
//! - **Attributes**: closed value enumerations (`Size`, `Color`) and the
//!   capability traits (`HasSize`, `HasColor`) items implement to expose them
//! - **Specifications**: the `Specification<T>` trait, one specification per
//!   attribute, and `AndSpecification` for conjunction
//! - **Filters**: the `Filter` trait and the stateless `GenericFilter`
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: specifications composed together judge the same item
//!    type, checked by the compiler
//! 2. **Purity**: evaluating a specification never mutates anything
//! 3. **Composition**: complex conditions are nested conjunctions of simple ones
//!
//! ## Example
//!
//! ```
//! use cim_specification::{filter, Color, ColorSpecification, Product, Size, SizeSpecification, Specification};
//!
//! let items = vec![
//!     Product::new("tree", Color::Green, Size::Large),
//!     Product::new("frog", Color::Green, Size::Small),
//!     Product::new("strawberry", Color::Red, Size::Small),
//! ];
//!
//! let red = ColorSpecification::<Product>::new(Color::Red);
//! let small = SizeSpecification::<Product>::new(Size::Small);
//!
//! let result = filter(&items, &red.and(small));
//! assert_eq!(result, vec![Product::new("strawberry", Color::Red, Size::Small)]);
//! assert_eq!(result[0].to_string(), "small red strawberry");
//! ```

#![warn(missing_docs)]

mod attribute_specs;
mod attributes;
mod errors;
mod filter;
mod product;
mod specification;
pub mod scenario;

// Re-export core types
pub use attribute_specs::{ColorSpecification, SizeSpecification};
pub use attributes::{Color, HasColor, HasSize, Size};
pub use errors::{SpecError, SpecResult};
pub use filter::{filter, Filter, GenericFilter};
pub use product::Product;
pub use specification::{AndSpecification, DomainConcept, Specification};
