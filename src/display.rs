//! Console formatting for catalog listings.

use std::fmt;

use crate::models::Cookbook;

const SPARKLE: &str = "✨";
const WORTHY: &str = "📸 Yes";
const NOT_WORTHY: &str = "Not aesthetic enough";
/// Ratings above this are drawn as this many sparkles.
pub const MAX_SPARKLES: i64 = 10;

/// Renders one cookbook as the multi-line card printed by the listing.
pub struct CookbookCard<'a>(pub &'a Cookbook);

impl fmt::Display for CookbookCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(f, "ID: {}", book.id)?;
        writeln!(f, "Title: {}", book.title)?;
        writeln!(f, "Author: {}", book.author)?;
        match book.year_published {
            Some(year) => writeln!(f, "Published: {year}")?,
            None => writeln!(f, "Published: Unknown")?,
        }
        writeln!(f, "Aesthetic Rating: {}", sparkles(book.aesthetic_rating))?;
        writeln!(f, "Instagram Worthy: {}", instagram_label(book.instagram_worthy))?;
        writeln!(f, "Cover Color: {}", book.cover_color.as_deref().unwrap_or("Unknown"))?;
        write!(f, "---")
    }
}

/// One sparkle per rating point, capped at [`MAX_SPARKLES`]. Missing or
/// negative ratings render as nothing.
pub fn sparkles(rating: Option<i64>) -> String {
    let count = rating.unwrap_or(0).clamp(0, MAX_SPARKLES);
    SPARKLE.repeat(count as usize)
}

pub fn instagram_label(worthy: Option<bool>) -> &'static str {
    if worthy.unwrap_or(false) {
        WORTHY
    } else {
        NOT_WORTHY
    }
}
