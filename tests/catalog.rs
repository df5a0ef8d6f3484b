use chrono::NaiveDate;
use cookbook_catalog::driver;
use cookbook_catalog::sample::{sample_cookbooks, SAMPLE_TAGS};
use cookbook_catalog::{ops, sqlite, Catalog, CatalogConfig, Cookbook, NewCookbook, NewLoan};
use rusqlite::Connection;
use tempfile::NamedTempFile;

// Helper function to create an in-memory catalog with its tables in place
fn create_test_catalog() -> Catalog {
    let catalog = Catalog::open_in_memory().unwrap();
    catalog.initialize_schema();
    catalog
}

// Helper function to create a temporary file-based catalog
fn create_temp_catalog() -> (Catalog, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let catalog = Catalog::open(CatalogConfig::new(temp_file.path())).unwrap();
    catalog.initialize_schema();
    (catalog, temp_file)
}

fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

fn fermented_everything() -> NewCookbook {
    NewCookbook::new("Fermented Everything", "Jim Kombucha", 2021, 3, true, "Denim")
}

#[test]
fn test_initialize_schema_is_idempotent() {
    let (catalog, _file) = create_temp_catalog();
    sqlite::initialize_schema(catalog.connection()).unwrap();
    sqlite::initialize_schema(catalog.connection()).unwrap();

    for table in ["cookbooks", "borrowed_books", "tags", "cookbook_tags"] {
        let copies: i64 = catalog
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(copies, 1, "table {table}");
    }
}

#[test]
fn test_insert_returns_fresh_ids() {
    let catalog = create_test_catalog();

    let first = catalog.add_cookbook(&fermented_everything()).unwrap();
    let second = catalog.add_cookbook(&fermented_everything()).unwrap();

    assert!(first > 0);
    assert_ne!(first, second);
}

#[test]
fn test_insert_missing_required_field_returns_none() {
    let catalog = create_test_catalog();

    assert_eq!(catalog.add_cookbook(&NewCookbook::minimal("", "Jim Kombucha")), None);
    assert_eq!(catalog.add_cookbook(&NewCookbook::minimal("Fermented Everything", "  ")), None);
    assert_eq!(count(catalog.connection(), "SELECT COUNT(*) FROM cookbooks"), 0);
}

#[test]
fn test_insert_without_tables_returns_none() {
    let catalog = Catalog::open_in_memory().unwrap();
    assert_eq!(catalog.add_cookbook(&fermented_everything()), None);
    assert!(catalog.list_cookbooks_to(&mut Vec::new()).is_empty());
    assert!(!catalog.add_tags(1, &["organic"]));
}

#[test]
fn test_list_returns_every_inserted_row() {
    let catalog = create_test_catalog();
    let samples = sample_cookbooks();
    let ids: Vec<i64> = samples
        .iter()
        .map(|c| catalog.add_cookbook(c).unwrap())
        .collect();

    let mut out = Vec::new();
    let books = catalog.list_cookbooks_to(&mut out);

    assert_eq!(books.len(), samples.len());
    for ((book, sample), id) in books.iter().zip(&samples).zip(&ids) {
        assert_eq!(
            book,
            &Cookbook {
                id: *id,
                title: sample.title.clone(),
                author: sample.author.clone(),
                year_published: sample.year_published,
                aesthetic_rating: sample.aesthetic_rating,
                instagram_worthy: sample.instagram_worthy,
                cover_color: sample.cover_color.clone(),
            }
        );
    }
    assert_eq!(String::from_utf8(out).unwrap().matches("---").count(), 5);
}

#[test]
fn test_shared_tag_is_stored_once() {
    let catalog = create_test_catalog();
    let a = catalog.add_cookbook(&fermented_everything()).unwrap();
    let b = catalog.add_cookbook(&NewCookbook::minimal("Small Batch", "Sage Moonbeam")).unwrap();

    assert!(catalog.add_tags(a, &["organic"]));
    assert!(catalog.add_tags(b, &["organic"]));

    let conn = catalog.connection();
    assert_eq!(count(conn, "SELECT COUNT(*) FROM tags"), 1);
    assert_eq!(count(conn, "SELECT COUNT(*) FROM cookbook_tags"), 2);
    assert_eq!(catalog.all_tags().len(), 1);
}

#[test]
fn test_reattaching_pair_changes_nothing() {
    let catalog = create_test_catalog();
    let id = catalog.add_cookbook(&fermented_everything()).unwrap();

    assert!(catalog.add_tags(id, &["gluten-free", "organic", "moth-food"]));
    assert!(catalog.add_tags(id, &["organic"]));

    assert_eq!(count(catalog.connection(), "SELECT COUNT(*) FROM cookbook_tags"), 3);
    let names: Vec<String> = catalog
        .tags_for_cookbook(id)
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["gluten-free", "moth-food", "organic"]);
}

#[test]
fn test_failed_tagging_leaves_no_partial_rows() {
    let catalog = create_test_catalog();
    let id = catalog.add_cookbook(&fermented_everything()).unwrap();

    assert!(!catalog.add_tags(id, &["organic", ""]));

    assert_eq!(count(catalog.connection(), "SELECT COUNT(*) FROM tags"), 0);
    assert_eq!(count(catalog.connection(), "SELECT COUNT(*) FROM cookbook_tags"), 0);
}

#[test]
fn test_loan_without_return_date_reads_back_null() {
    let catalog = create_test_catalog();
    let id = catalog.add_cookbook(&fermented_everything()).unwrap();
    let borrowed = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    catalog.track_loan(&NewLoan::new(id, "Candace", borrowed));

    let loans = catalog.loans_for_cookbook(id);
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].borrower_name, "Candace");
    assert_eq!(loans[0].date_borrowed, borrowed);
    assert_eq!(loans[0].return_date, None);
    assert!(loans[0].is_out());

    let nulls = count(
        catalog.connection(),
        "SELECT COUNT(*) FROM borrowed_books WHERE return_date IS NULL",
    );
    assert_eq!(nulls, 1);
}

#[test]
fn test_loan_for_unknown_cookbook_depends_on_foreign_keys() {
    let borrowed = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    let (lenient, _file) = create_temp_catalog();
    lenient.track_loan(&NewLoan::new(99, "Candace", borrowed));
    assert_eq!(lenient.loans_for_cookbook(99).len(), 1);

    let strict_file = NamedTempFile::new().unwrap();
    let strict = Catalog::open(CatalogConfig::new(strict_file.path()).with_foreign_keys(true)).unwrap();
    strict.initialize_schema();
    assert!(ops::insert_loan(strict.connection(), &NewLoan::new(99, "Candace", borrowed)).is_err());
    assert!(strict.loans_for_cookbook(99).is_empty());
}

#[test]
fn test_listing_renders_rating_and_instagram_label() {
    let catalog = create_test_catalog();
    catalog.add_cookbook(&fermented_everything()).unwrap();

    let mut out = Vec::new();
    catalog.list_cookbooks_to(&mut out);
    let listing = String::from_utf8(out).unwrap();

    assert!(listing.contains("Title: Fermented Everything"));
    assert!(listing.contains("Aesthetic Rating: ✨✨✨\n"));
    assert!(listing.contains("Instagram Worthy: 📸 Yes"));
    assert!(listing.contains("Cover Color: Denim"));
}

#[test]
fn test_data_survives_reopen() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = CatalogConfig::new(temp_file.path());

    let catalog = Catalog::open(config.clone()).unwrap();
    catalog.initialize_schema();
    let id = catalog.add_cookbook(&fermented_everything()).unwrap();
    catalog.close().unwrap();

    let reopened = Catalog::open(config).unwrap();
    reopened.initialize_schema();
    let books = reopened.list_cookbooks_to(&mut Vec::new());
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);
}

#[test]
fn test_out_of_range_integers_do_not_hide_the_catalog() {
    let catalog = create_test_catalog();
    catalog.add_cookbook(&fermented_everything()).unwrap();
    catalog
        .connection()
        .execute_batch(
            "INSERT INTO cookbooks (title, author, aesthetic_rating) VALUES ('Odd', 'X', 300);
             INSERT INTO cookbooks (title, author, year_published, aesthetic_rating) VALUES ('Odder', 'Y', 9999999999, -2);",
        )
        .unwrap();

    let mut out = Vec::new();
    let books = catalog.list_cookbooks_to(&mut out);
    let listing = String::from_utf8(out).unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[1].aesthetic_rating, Some(300));
    assert_eq!(books[2].year_published, Some(9_999_999_999));
    assert!(listing.contains(&format!("Aesthetic Rating: {}\n", "✨".repeat(10))));
    assert!(listing.contains("Published: 9999999999"));
    assert!(listing.contains("Aesthetic Rating: \n"));
}

#[test]
fn test_driver_run_loads_samples_loan_and_tags() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig::new(dir.path().join("shelf.db"));

    driver::run(config.clone());

    let catalog = Catalog::open(config).unwrap();
    assert_eq!(catalog.list_cookbooks_to(&mut Vec::new()).len(), 5);
    assert_eq!(catalog.loans_for_cookbook(2).len(), 1);
    assert_eq!(catalog.tags_for_cookbook(1).len(), SAMPLE_TAGS.len());
}

#[test]
fn test_driver_run_returns_when_database_cannot_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig::new(dir.path().join("missing").join("shelf.db"));

    driver::run(config);

    assert!(!dir.path().join("missing").exists());
}
