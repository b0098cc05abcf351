// Copyright 2025 Cowboy AI, LLC.

//! Item attributes and capability traits
//!
//! Attributes are closed enumerations compared by value. Capabilities are
//! traits an item type implements to declare that it exposes an attribute,
//! which lets specifications be written against "anything with a color"
//! instead of a single concrete item type.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SpecError;

/// Size of an item
///
/// Deserialization goes through [`FromStr`], so labels are matched
/// case-insensitively and unknown labels report [`SpecError::UnknownSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small
    Small,
    /// Medium
    Medium,
    /// Large
    Large,
}

impl Size {
    /// Every size, in declaration order
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpecError::UnknownSize(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Color of an item
///
/// Deserialization goes through [`FromStr`], like [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpecError::UnknownColor(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Capability: the type exposes a mutable [`Size`]
pub trait HasSize {
    /// Current size
    fn size(&self) -> Size;

    /// Replace the size
    fn set_size(&mut self, size: Size);
}

/// Capability: the type exposes a mutable [`Color`]
pub trait HasColor {
    /// Current color
    fn color(&self) -> Color;

    /// Replace the color
    fn set_color(&mut self, color: Color);
}
