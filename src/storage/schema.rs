//! Database schema definitions

/// SQL to create the contacts table
///
/// `id` is the SQLite rowid alias, assigned on insert and never reused
/// while the database lives. `email` carries the UNIQUE constraint the
/// create path relies on.
pub const CREATE_CONTACTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY,
    firstName TEXT,
    lastName TEXT,
    email TEXT UNIQUE
)
"#;

/// All schema creation statements, in execution order
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CONTACTS_TABLE]
}
