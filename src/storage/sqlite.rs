//! SQLite storage implementation
//!
//! `Store` never holds a connection between operations. Each call opens the
//! database file, runs, and drops the connection on every exit path.

use std::path::{Path, PathBuf};
use rusqlite::{Batch, Connection, ToSql};
use crate::model::{Customer, InvoiceSummary};
use crate::{Result, Variant};
use super::record::Record;
use super::schema;

const LIST_CUSTOMERS: &str =
    "SELECT CustomerId, Name, Email, Phone, Country FROM Customers ORDER BY CustomerId";

const LIST_INVOICE_CUSTOMERS: &str =
    "SELECT CustomerId, Name, Email, Phone, NULL AS Country FROM Customers ORDER BY CustomerId";

const LIST_INVOICES: &str = r#"
SELECT i.InvoiceId, i.InvoiceNumber, c.Name, i.IssueDate, i.Total, i.Status
FROM Invoices i
INNER JOIN Customers c ON c.CustomerId = i.CustomerId
ORDER BY i.InvoiceId
"#;

/// Handle to a file-backed SQLite database
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    foreign_keys: bool,
}

impl Store {
    /// Describe a database file. Nothing is opened until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            foreign_keys: true,
        }
    }

    /// Toggle `PRAGMA foreign_keys` on every connection (on by default)
    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        tracing::debug!("opening connection to {}", self.path.display());
        let conn = Connection::open(&self.path)?;
        if self.foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON")?;
        }
        Ok(conn)
    }

    /// Run `f` against a fresh connection that is closed when it returns
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        let result = f(&conn);
        drop(conn);
        tracing::debug!("closed connection to {}", self.path.display());
        result
    }

    // ========== Schema ==========

    /// Create every table of the variant that does not exist yet
    pub fn initialize_schema(&self, variant: Variant) -> Result<()> {
        self.with_connection(|conn| {
            for stmt in schema::statements(variant) {
                conn.execute(stmt, [])?;
            }
            Ok(())
        })
    }

    /// Check if a table exists in the database
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        self.with_connection(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
    }

    /// Count the rows of one of the schema's tables
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        self.with_connection(|conn| count_rows(conn, table))
    }

    // ========== Lookups ==========

    /// Run statement text exactly as given.
    ///
    /// The text goes through SQLite's batch interface, so every `;`-separated
    /// statement in it is prepared and executed in order. Rows from all
    /// row-returning statements are collected.
    pub fn execute_unchecked(&self, sql: &str) -> Result<RawExecution> {
        self.with_connection(|conn| {
            let mut outcome = RawExecution::default();
            let mut batch = Batch::new(conn, sql);
            while let Some(mut stmt) = batch.next()? {
                outcome.statements += 1;
                tracing::debug!(statement = outcome.statements, "executing unchecked statement");
                if stmt.column_count() > 0 {
                    let names = column_names(&stmt);
                    let mut rows = stmt.query([])?;
                    while let Some(row) = rows.next()? {
                        outcome.rows.push(Record::from_row(&names, row)?);
                    }
                } else {
                    outcome.changes += stmt.execute([])?;
                }
            }
            Ok(outcome)
        })
    }

    /// Run a single prepared statement with `value` bound to the named placeholder
    pub fn query_bound(&self, sql: &str, placeholder: &str, value: &str) -> Result<Vec<Record>> {
        self.with_connection(|conn| {
            tracing::debug!(%placeholder, %value, "executing bound statement");
            let mut stmt = conn.prepare(sql)?;
            let names = column_names(&stmt);
            let params: &[(&str, &dyn ToSql)] = &[(placeholder, &value)];
            let mut rows = stmt.query(params)?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(Record::from_row(&names, row)?);
            }
            Ok(records)
        })
    }

    // ========== Listings ==========

    /// All customers, ascending by id. `country` is `None` for the invoice schema.
    pub fn list_customers(&self, variant: Variant) -> Result<Vec<Customer>> {
        let sql = match variant {
            Variant::Customers => LIST_CUSTOMERS,
            Variant::Invoices => LIST_INVOICE_CUSTOMERS,
        };
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let customers = stmt
                .query_map([], |row| {
                    Ok(Customer {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        phone: row.get(3)?,
                        country: row.get(4)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(customers)
        })
    }

    /// All invoices joined with the customer name, ascending by id
    pub fn list_invoices(&self) -> Result<Vec<InvoiceSummary>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(LIST_INVOICES)?;
            let invoices = stmt
                .query_map([], |row| {
                    Ok(InvoiceSummary {
                        id: row.get(0)?,
                        number: row.get(1)?,
                        customer_name: row.get(2)?,
                        issue_date: row.get(3)?,
                        total: row.get(4)?,
                        status: row.get(5)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(invoices)
        })
    }
}

/// Result of running unchecked statement text
#[derive(Debug, Clone, Default)]
pub struct RawExecution {
    /// Rows from every row-returning statement, in execution order
    pub rows: Vec<Record>,
    /// Number of statements the text contained
    pub statements: usize,
    /// Rows changed by non-query statements
    pub changes: usize,
}

pub(crate) fn count_rows(conn: &Connection, table: &str) -> Result<usize> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count as usize)
}

fn column_names(stmt: &rusqlite::Statement<'_>) -> Vec<String> {
    stmt.column_names().into_iter().map(String::from).collect()
}
