//! The fixed demo run performed by the binary.
//!
//! Nothing in here fails the process: every error is logged and the run
//! carries on, or stops early when there is no connection to work with.

use tracing::error;

use crate::sample::{sample_cookbooks, sample_loan, SAMPLE_TAGGED_COOKBOOK, SAMPLE_TAGS};
use crate::{Catalog, CatalogConfig};

/// Connect, create tables, load the samples, print them, record a loan, tag a
/// cookbook, and close.
pub fn run(config: CatalogConfig) {
    let catalog = match Catalog::open(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            error!("Error! The universe is not aligned for database connections right now.");
            return;
        }
    };

    catalog.initialize_schema();

    println!("\nCurating your cookbook collection . . .");
    for cookbook in sample_cookbooks() {
        catalog.add_cookbook(&cookbook);
    }

    println!("\nYour carefully curated collection:");
    catalog.list_cookbooks();

    match sample_loan() {
        Ok(loan) => catalog.track_loan(&loan),
        Err(e) => error!("Error parsing sample loan date: {e}"),
    }
    catalog.add_tags(SAMPLE_TAGGED_COOKBOOK, &SAMPLE_TAGS);

    if let Err(e) = catalog.close() {
        error!("Error closing database connection: {e}");
    }
}
