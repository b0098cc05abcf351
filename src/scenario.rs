// Copyright 2025 Cowboy AI, LLC.

//! Demonstration scenario
//!
//! Filters a fixed catalog of products with a color-and-size query. The query
//! defaults to red and small and can be overridden with a JSON document in the
//! `CIM_SPEC_SCENARIO` environment variable, e.g.
//! `{"color": "green", "size": "large"}`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::info;

use crate::attribute_specs::{ColorSpecification, SizeSpecification};
use crate::attributes::{Color, HasColor, HasSize, Size};
use crate::errors::{SpecError, SpecResult};
use crate::filter::{Filter, GenericFilter};
use crate::product::Product;
use crate::specification::AndSpecification;

/// Environment variable holding a JSON scenario configuration
pub const SCENARIO_ENV_VAR: &str = "CIM_SPEC_SCENARIO";

/// Color-and-size query the scenario filters by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Color the selected products must have
    pub color: Color,
    /// Size the selected products must have
    pub size: Size,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            color: Color::Red,
            size: Size::Small,
        }
    }
}

impl ScenarioConfig {
    /// Decode a configuration from JSON
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration from [`SCENARIO_ENV_VAR`], falling back to the default
    pub fn from_env() -> SpecResult<Self> {
        match std::env::var(SCENARIO_ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(SpecError::invalid_configuration(format!(
                "{SCENARIO_ENV_VAR}: {err}"
            ))),
        }
    }

    /// `Color(color) AND Size(size)` over any item with both capabilities
    pub fn specification<T>(
        &self,
    ) -> AndSpecification<T, ColorSpecification<T>, SizeSpecification<T>>
    where
        T: HasColor + HasSize + 'static,
    {
        AndSpecification::new(
            ColorSpecification::new(self.color),
            SizeSpecification::new(self.size),
        )
    }
}

/// The fixed demonstration catalog: a tree, a frog and a strawberry
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("tree", Color::Green, Size::Large),
        Product::new("frog", Color::Green, Size::Small),
        Product::new("strawberry", Color::Red, Size::Small),
    ]
}

/// Filter the sample catalog with the configured query
pub fn run_scenario(config: &ScenarioConfig) -> Vec<Product> {
    info!(color = %config.color, size = %config.size, "Running specification scenario");
    GenericFilter::<Product>::new().filter(&sample_catalog(), &config.specification())
}

/// Render a collection as `[a, b, c]`
pub fn render_collection<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_red_and_small() {
        let config = ScenarioConfig::default();
        assert_eq!(config.color, Color::Red);
        assert_eq!(config.size, Size::Small);
    }

    #[test]
    fn test_from_json() {
        let config = ScenarioConfig::from_json(r#"{"color": "green", "size": "large"}"#).unwrap();
        assert_eq!(
            config,
            ScenarioConfig {
                color: Color::Green,
                size: Size::Large,
            }
        );
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        for json in [
            "{not json",
            r#"{"color": "mauve", "size": "small"}"#,
            r#"{"color": "red"}"#,
            r#"{"color": "red", "size": "small", "shape": "round"}"#,
        ] {
            assert!(
                matches!(
                    ScenarioConfig::from_json(json),
                    Err(SpecError::InvalidConfiguration(_))
                ),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_from_json_parses_labels_case_insensitively() {
        let config = ScenarioConfig::from_json(r#"{"color": "BLUE", "size": "Small"}"#).unwrap();
        assert_eq!(
            config,
            ScenarioConfig {
                color: Color::Blue,
                size: Size::Small,
            }
        );
        assert!(run_scenario(&config).is_empty());
    }

    #[test]
    fn test_from_json_reports_unknown_label() {
        match ScenarioConfig::from_json(r#"{"color": "mauve", "size": "small"}"#) {
            Err(SpecError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("Unknown color: mauve"), "{msg}")
            }
            other => panic!("Expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_default_scenario_selects_strawberry() {
        let result = run_scenario(&ScenarioConfig::default());
        assert_eq!(
            result,
            vec![Product::new("strawberry", Color::Red, Size::Small)]
        );
        assert_eq!(render_collection(&result), "[small red strawberry]");
    }

    #[test]
    fn test_configured_specification_targets() {
        let config = ScenarioConfig {
            color: Color::Blue,
            size: Size::Medium,
        };
        let spec = config.specification::<Product>();
        assert_eq!(spec.left().target(), Color::Blue);
        assert_eq!(spec.right().target(), Size::Medium);
    }

    #[test]
    fn test_render_collection() {
        let empty: Vec<Product> = Vec::new();
        assert_eq!(render_collection(&empty), "[]");
        assert_eq!(
            render_collection(&sample_catalog()),
            "[large green tree, small green frog, small red strawberry]"
        );
    }
}
