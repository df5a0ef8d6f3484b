//! Loan tracking

use rusqlite::{params, Connection};

use crate::error::{require_text, Result};
use crate::models::{Loan, NewLoan};

/// Record a borrowing event and return the loan id
pub fn insert_loan(conn: &Connection, loan: &NewLoan) -> Result<i64> {
    require_text(&loan.borrower_name, "borrower_name", "loan")?;

    conn.execute(
        "INSERT INTO borrowed_books (cookbook_id, borrower_name, date_borrowed, return_date) VALUES (?1, ?2, ?3, ?4)",
        params![
            loan.cookbook_id,
            loan.borrower_name,
            loan.date_borrowed,
            loan.return_date,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Get every loan recorded against a cookbook, oldest first
pub fn get_loans_for_cookbook(conn: &Connection, cookbook_id: i64) -> Result<Vec<Loan>> {
    let mut stmt = conn.prepare(
        "SELECT id, cookbook_id, borrower_name, date_borrowed, return_date FROM borrowed_books WHERE cookbook_id = ?1 ORDER BY id",
    )?;
    let loans = stmt
        .query_map([cookbook_id], Loan::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(loans)
}
