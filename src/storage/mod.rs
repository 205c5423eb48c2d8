//! Storage Layer - SQLite-backed persistence
//!
//! One database file per variant:
//! - customers.db: Customers(CustomerId, Name, Email, Phone, Country)
//! - invoices.db: Customers, Invoices(InvoiceNumber unique), InvoiceDetails

pub mod record;
pub mod schema;
pub mod sqlite;

pub use record::{display_value, Record};
pub use sqlite::{RawExecution, Store};
