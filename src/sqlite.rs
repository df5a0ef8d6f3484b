//! Schema definitions for the catalog database and the DDL they render to.

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// Schema definition for the SQLite database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Render every table as a `CREATE TABLE IF NOT EXISTS` statement.
    pub fn create_statements(&self) -> Vec<String> {
        self.tables.iter().map(TableDefinition::create_statement).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    /// Table-level (possibly composite) primary key.
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_foreign_key(mut self, column: &str, foreign_table: &str, foreign_column: &str) -> Self {
        self.foreign_keys.push(ForeignKey {
            column: column.to_string(),
            foreign_table: foreign_table.to_string(),
            foreign_column: foreign_column.to_string(),
        });
        self
    }

    pub fn create_statement(&self) -> String {
        let mut parts: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        if !self.primary_key.is_empty() {
            parts.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }
        parts.extend(self.foreign_keys.iter().map(ForeignKey::to_sql));
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
            self.name,
            parts.join(",\n    ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Shorthand for an `INTEGER PRIMARY KEY AUTOINCREMENT` id column.
    pub fn id() -> Self {
        Self::new("id", DataType::Integer)
            .with_constraint(ColumnConstraint::PrimaryKey)
            .with_constraint(ColumnConstraint::AutoIncrement)
    }

    pub fn required(name: &str, data_type: DataType) -> Self {
        Self::new(name, data_type).with_constraint(ColumnConstraint::NotNull)
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

/// Declared column types. `Boolean` and `Date` keep their names in the DDL
/// and get NUMERIC affinity from SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
    Boolean,
    Date,
}

impl DataType {
    pub fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    AutoIncrement,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    pub fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
            ColumnConstraint::AutoIncrement => "AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: String,
    pub foreign_table: String,
    pub foreign_column: String,
}

impl ForeignKey {
    fn to_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            self.column, self.foreign_table, self.foreign_column
        )
    }
}

/// The four catalog tables.
pub fn catalog_schema() -> Schema {
    use ColumnConstraint::*;
    use DataType::*;

    Schema::new()
        .add_table(
            TableDefinition::new("cookbooks")
                .with_column(ColumnDefinition::id())
                .with_column(ColumnDefinition::required("title", Text))
                .with_column(ColumnDefinition::required("author", Text))
                .with_column(ColumnDefinition::new("year_published", Integer))
                .with_column(ColumnDefinition::new("aesthetic_rating", Integer))
                .with_column(ColumnDefinition::new("instagram_worthy", Boolean))
                .with_column(ColumnDefinition::new("cover_color", Text)),
        )
        .add_table(
            TableDefinition::new("borrowed_books")
                .with_column(ColumnDefinition::id())
                .with_column(ColumnDefinition::required("cookbook_id", Integer))
                .with_column(ColumnDefinition::required("borrower_name", Text))
                .with_column(ColumnDefinition::required("date_borrowed", Date))
                .with_column(ColumnDefinition::new("return_date", Date))
                .with_foreign_key("cookbook_id", "cookbooks", "id"),
        )
        .add_table(
            TableDefinition::new("tags")
                .with_column(ColumnDefinition::id())
                .with_column(ColumnDefinition::required("name", Text).with_constraint(Unique)),
        )
        .add_table(
            TableDefinition::new("cookbook_tags")
                .with_column(ColumnDefinition::required("cookbook_id", Integer))
                .with_column(ColumnDefinition::required("tag_id", Integer))
                .with_primary_key(&["cookbook_id", "tag_id"])
                .with_foreign_key("cookbook_id", "cookbooks", "id")
                .with_foreign_key("tag_id", "tags", "id"),
        )
}

/// Create any catalog tables that do not exist yet. Safe to call repeatedly.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let schema = catalog_schema();
    for (name, sql) in schema.table_names().zip(schema.create_statements()) {
        debug!(table = name, "ensuring table");
        conn.execute_batch(&sql)?;
    }
    Ok(())
}
