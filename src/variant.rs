//! Demo variants
//!
//! The demonstration ships with two schemas that share every handler:
//! - `Customers`: a single flat `Customers` table
//! - `Invoices`: `Customers`, `Invoices` and `InvoiceDetails`, listed through a join

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The schema a demo session runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One `Customers` table with a country column
    #[default]
    Customers,
    /// Customers with invoices and invoice detail lines
    Invoices,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Customers => "customers",
            Variant::Invoices => "invoices",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[Variant::Customers, Variant::Invoices]
    }

    /// Database file created in the working directory when none is configured
    pub fn default_database(&self) -> &'static str {
        match self {
            Variant::Customers => "customers.db",
            Variant::Invoices => "invoices.db",
        }
    }

    /// Table whose row count gates fixture loading and which list-all enumerates
    pub fn primary_table(&self) -> &'static str {
        match self {
            Variant::Customers => "Customers",
            Variant::Invoices => "Invoices",
        }
    }

    /// Singular entity name used in prompts
    pub fn entity(&self) -> &'static str {
        match self {
            Variant::Customers => "customer",
            Variant::Invoices => "invoice",
        }
    }

    /// Plural entity name used in listings and empty-result messages
    pub fn entity_plural(&self) -> &'static str {
        match self {
            Variant::Customers => "customers",
            Variant::Invoices => "invoices",
        }
    }

    pub fn menu_title(&self) -> &'static str {
        match self {
            Variant::Customers => "=== SQL INJECTION DEMO - CUSTOMER SEARCH ===",
            Variant::Invoices => "=== SQL INJECTION DEMO - INVOICE SEARCH ===",
        }
    }

    /// Payloads suggested next to the vulnerable query
    pub fn injection_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Variant::Customers => &[
                ("1 OR 1=1", "returns all customers"),
                ("1; DROP TABLE Customers; --", "tries to delete the table"),
                ("1 UNION SELECT * FROM Customers --", "unauthorized access"),
            ],
            Variant::Invoices => &[
                ("1 OR 1=1", "returns all invoices"),
                ("1; DROP TABLE InvoiceDetails; --", "tries to delete the detail lines"),
                (
                    "0 UNION SELECT CustomerId, Email, Name, Phone, 0, 'leaked' FROM Customers --",
                    "reads customer contact data",
                ),
            ],
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "customers" | "customer" | "1" => Ok(Variant::Customers),
            "invoices" | "invoice" | "2" => Ok(Variant::Invoices),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_roundtrip() {
        for variant in Variant::all() {
            let parsed: Variant = variant.as_str().parse().unwrap();
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!(Variant::from_str("Invoice").unwrap(), Variant::Invoices);
        assert_eq!(Variant::from_str("1").unwrap(), Variant::Customers);
        assert!(matches!(
            Variant::from_str("orders"),
            Err(Error::UnknownVariant(name)) if name == "orders"
        ));
    }

    #[test]
    fn test_default_databases_differ() {
        assert_eq!(Variant::default(), Variant::Customers);
        assert_eq!(Variant::Customers.default_database(), "customers.db");
        assert_eq!(Variant::Invoices.default_database(), "invoices.db");
    }
}
