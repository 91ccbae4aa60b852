//! # themegen — the statskit style pipeline
//!
//! Composition root that turns the design tokens into a concrete
//! stylesheet.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Validate the token set
//! - Render the CSS vocabulary and write it to the configured path
//!
//! ## Dependency rule
//! This is the only crate that performs IO. Token semantics live in
//! `statskit-theme`; nothing here inspects individual colors.

mod config;

use anyhow::Context;
use statskit_theme::{DesignTokens, css};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let tokens = DesignTokens::default();
    tokens.validate().context("validating design tokens")?;

    let stylesheet = css::render(&tokens);
    std::fs::write(&config.output.path, &stylesheet)
        .with_context(|| format!("writing {}", config.output.path))?;

    tracing::info!(
        path = %config.output.path,
        bytes = stylesheet.len(),
        tokens = tokens.token_names().len(),
        "stylesheet written"
    );

    Ok(())
}
