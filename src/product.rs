// Copyright 2025 Cowboy AI, LLC.

//! Product value object
//!
//! A named item with a color and a size. Products are compared structurally
//! and have no identity of their own.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{Color, HasColor, HasSize, Size};

/// A named product exposing both the color and size capabilities
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    /// Display name
    pub name: String,
    /// Color of the product
    pub color: Color,
    /// Size of the product
    pub size: Size,
}

impl Product {
    /// Create a product; every field is required
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HasColor for Product {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl HasSize for Product {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

/// Renders as `<size> <color> <name>`, e.g. `small red strawberry`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.size, self.color, self.name)
    }
}
