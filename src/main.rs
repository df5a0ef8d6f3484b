use anyhow::Result;

use cookbook_catalog::driver;
use cookbook_catalog::logging::init_tracing;
use cookbook_catalog::CatalogConfig;

fn main() -> Result<()> {
    init_tracing()?;
    driver::run(CatalogConfig::default());
    Ok(())
}
