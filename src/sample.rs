//! The fixed demo dataset the binary loads on every run.

use chrono::NaiveDate;

use crate::models::{NewCookbook, NewLoan};

/// Five carefully curated sample cookbooks.
pub fn sample_cookbooks() -> Vec<NewCookbook> {
    vec![
        NewCookbook::new(
            "Foraged & Found: A Guide to Pretending You Know About Mushrooms",
            "Oak Wavelength",
            2023,
            5,
            true,
            "Forest Green",
        ),
        NewCookbook::new(
            "Small Batch: 50 Recipes You Will Never Actually Make",
            "Sage Moonbeam",
            2022,
            4,
            true,
            "Raw Linen",
        ),
        NewCookbook::new(
            "The Artistic Toast: Advanced Avocado Techniques",
            "River Wildflower",
            2023,
            5,
            true,
            "Recycled Brown",
        ),
        NewCookbook::new("Fermented Everything", "Jim Kombucha", 2021, 3, true, "Denim"),
        NewCookbook::new(
            "The Deconstructed Sandwich: Making Simple Things Complicated",
            "Juniper Vinegar-Smith",
            2023,
            5,
            true,
            "Beige",
        ),
    ]
}

pub const SAMPLE_LOAN_DATE: &str = "2025-03-31";

/// Candace borrows cookbook 2 and has not returned it.
pub fn sample_loan() -> chrono::ParseResult<NewLoan> {
    let borrowed: NaiveDate = SAMPLE_LOAN_DATE.parse()?;
    Ok(NewLoan::new(2, "Candace", borrowed))
}

pub const SAMPLE_TAGGED_COOKBOOK: i64 = 1;
pub const SAMPLE_TAGS: [&str; 3] = ["gluten-free", "organic", "moth-food"];
