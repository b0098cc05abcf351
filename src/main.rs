// Copyright 2025 Cowboy AI, LLC.

//! Runs the specification scenario and prints the selected products.
//!
//! Set `RUST_LOG` to see trace output on stderr and `CIM_SPEC_SCENARIO` to
//! change the query.

use anyhow::Context;
use cim_specification::scenario::{render_collection, run_scenario, ScenarioConfig};

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ScenarioConfig::from_env().context("failed to load scenario configuration")?;
    let result = run_scenario(&config);
    println!("{}", render_collection(&result));

    Ok(())
}
