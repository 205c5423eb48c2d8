//! Lookup construction
//!
//! Both lookups share the same SELECT and id predicate. They differ only in
//! how the user's text reaches the statement:
//! - `LookupQuery::vulnerable` splices it into the statement text
//! - `LookupQuery::safe` leaves a named placeholder and binds it as a value

use crate::storage::{RawExecution, Record, Store};
use crate::{Result, Variant};

const CUSTOMER_SELECT: &str = "SELECT CustomerId, Name, Email, Phone, Country FROM Customers";

const INVOICE_SELECT: &str = "SELECT i.InvoiceId, i.InvoiceNumber, c.Name AS CustomerName, i.IssueDate, i.Total, i.Status FROM Invoices i INNER JOIN Customers c ON c.CustomerId = i.CustomerId";

/// The fixed pieces of a variant's lookup statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupShape {
    pub select: &'static str,
    pub id_column: &'static str,
    pub placeholder: &'static str,
}

impl LookupShape {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Customers => Self {
                select: CUSTOMER_SELECT,
                id_column: "CustomerId",
                placeholder: "@CustomerId",
            },
            Variant::Invoices => Self {
                select: INVOICE_SELECT,
                id_column: "i.InvoiceId",
                placeholder: "@InvoiceId",
            },
        }
    }

    /// Statement text with the placeholder in the predicate position
    pub fn template(&self) -> String {
        format!("{} WHERE {} = {}", self.select, self.id_column, self.placeholder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Vulnerable,
    Safe,
}

/// A value bound to a named placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
    pub name: &'static str,
    pub value: String,
}

/// A lookup statement ready to show and execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub mode: LookupMode,
    pub sql: String,
    pub param: Option<BoundParam>,
}

impl LookupQuery {
    /// Build the lookup by pasting `raw` into the WHERE clause.
    ///
    /// The input is not escaped, quoted, trimmed or type checked. Whatever SQL it
    /// contains becomes part of the statement.
    pub fn vulnerable(variant: Variant, raw: &str) -> Self {
        let shape = LookupShape::for_variant(variant);
        let sql = shape.select.to_string() + " WHERE " + shape.id_column + " = " + raw;
        Self {
            mode: LookupMode::Vulnerable,
            sql,
            param: None,
        }
    }

    /// Build the lookup with a named placeholder; `raw` travels as a bound value.
    pub fn safe(variant: Variant, raw: &str) -> Self {
        let shape = LookupShape::for_variant(variant);
        Self {
            mode: LookupMode::Safe,
            sql: shape.template(),
            param: Some(BoundParam {
                name: shape.placeholder,
                value: raw.to_string(),
            }),
        }
    }

    pub fn execute(&self, store: &Store) -> Result<LookupOutcome> {
        match &self.param {
            None => {
                let RawExecution { rows, statements, .. } = store.execute_unchecked(&self.sql)?;
                Ok(LookupOutcome { rows, statements })
            }
            Some(param) => {
                let rows = store.query_bound(&self.sql, param.name, &param.value)?;
                Ok(LookupOutcome { rows, statements: 1 })
            }
        }
    }
}

/// Rows returned by a lookup
#[derive(Debug, Clone, Default)]
pub struct LookupOutcome {
    pub rows: Vec<Record>,
    /// Statements executed; more than one only when input stacked extra statements
    pub statements: usize,
}
