//! # sqli-demo - SQL injection versus parameterized queries
//!
//! An interactive, single-user demonstration over a local SQLite file.
//!
//! sqli-demo provides:
//! - Two schema variants: a flat `Customers` table, and `Customers`/`Invoices`/`InvoiceDetails`
//! - Idempotent schema creation and literal fixture seeding
//! - A deliberately vulnerable lookup that splices raw input into the statement text
//! - A safe lookup that binds the same input to a named placeholder
//! - A menu state machine driven by an injectable line source and sink

pub mod app;
pub mod config;
pub mod fixtures;
pub mod menu;
pub mod model;
pub mod query;
pub mod storage;
pub mod ui;
pub mod variant;

// Re-exports for convenient access
pub use app::DemoApp;
pub use menu::{MenuChoice, MenuState, Session};
pub use storage::{Record, Store};
pub use variant::Variant;

/// Result type alias for sqli-demo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sqli-demo operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}
