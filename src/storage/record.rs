//! Untyped result rows
//!
//! The vulnerable lookup can return rows of any shape (a `UNION` may pull in
//! another table), so lookups yield ordered column/value pairs instead of a
//! fixed struct.

use rusqlite::types::Value;

/// One returned row, columns in statement order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Read the current row of a statement
    pub(crate) fn from_row(names: &[String], row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let mut columns = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            let value: Value = row.get(idx)?;
            columns.push((name.clone(), value));
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[(String, Value)] {
        &self.columns
    }

    /// First value under the given column name
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_text(&self, column: &str) -> Option<&str> {
        match self.get(column)? {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Render a value the way a data reader would stringify it
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
