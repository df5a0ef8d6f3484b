//! Console logging setup.
//!
//! `RUST_LOG` overrides the default `info` filter, e.g.
//! `RUST_LOG=cookbook_catalog=debug` to see each table as it is ensured.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a compact stdout subscriber. Fails if one is already installed.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
