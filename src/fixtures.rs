//! Seed data
//!
//! Fixtures are inserted once per database file. Each row is a separate
//! literal-embedded INSERT with no surrounding transaction, so a failure part
//! way through leaves the rows inserted so far in place.

use rusqlite::Connection;
use crate::model::{CustomerSeed, InvoiceDetailSeed, InvoiceSeed};
use crate::storage::sqlite::count_rows;
use crate::{Result, Store, Variant};

/// Customers of the flat schema, in insertion order
pub const CUSTOMERS: &[CustomerSeed] = &[
    CustomerSeed { name: "John Smith", email: "john.smith@example.com", phone: "+1-555-0101", country: Some("USA") },
    CustomerSeed { name: "Mary Johnson", email: "mary.johnson@example.com", phone: "+1-555-0102", country: Some("USA") },
    CustomerSeed { name: "Robert Williams", email: "robert.williams@example.com", phone: "+1-555-0103", country: Some("Canada") },
    CustomerSeed { name: "Patricia Brown", email: "patricia.brown@example.com", phone: "+1-555-0104", country: Some("USA") },
    CustomerSeed { name: "Michael Davis", email: "michael.davis@example.com", phone: "+44-20-7946-0958", country: Some("United Kingdom") },
    CustomerSeed { name: "Jennifer Garcia", email: "jennifer.garcia@example.com", phone: "+1-555-0106", country: Some("USA") },
    CustomerSeed { name: "David Rodriguez", email: "david.rodriguez@example.com", phone: "+34-91-123-4567", country: Some("Spain") },
    CustomerSeed { name: "Linda Martinez", email: "linda.martinez@example.com", phone: "+33-1-42-68-53-00", country: Some("France") },
];

/// Customers of the invoice schema
pub const INVOICE_CUSTOMERS: &[CustomerSeed] = &[
    CustomerSeed { name: "Acme Corporation", email: "billing@acme.example.com", phone: "+1-555-0201", country: None },
    CustomerSeed { name: "Globex Industries", email: "accounts@globex.example.com", phone: "+1-555-0202", country: None },
    CustomerSeed { name: "Initech Solutions", email: "finance@initech.example.com", phone: "+1-555-0203", country: None },
    CustomerSeed { name: "Umbrella Logistics", email: "ap@umbrella.example.com", phone: "+44-20-7946-0100", country: None },
    CustomerSeed { name: "Stark Manufacturing", email: "payables@stark.example.com", phone: "+1-555-0205", country: None },
];

pub const INVOICES: &[InvoiceSeed] = &[
    InvoiceSeed { number: "INV-2024-001", customer_id: 1, issue_date: "2024-01-15", total: 1500.00, status: Some("Paid") },
    InvoiceSeed { number: "INV-2024-002", customer_id: 2, issue_date: "2024-01-22", total: 2400.00, status: Some("Paid") },
    InvoiceSeed { number: "INV-2024-003", customer_id: 1, issue_date: "2024-02-05", total: 875.50, status: None },
    InvoiceSeed { number: "INV-2024-004", customer_id: 3, issue_date: "2024-02-18", total: 3200.00, status: Some("Overdue") },
    InvoiceSeed { number: "INV-2024-005", customer_id: 4, issue_date: "2024-03-03", total: 640.00, status: None },
    InvoiceSeed { number: "INV-2024-006", customer_id: 5, issue_date: "2024-03-12", total: 12500.00, status: Some("Paid") },
    InvoiceSeed { number: "INV-2024-007", customer_id: 2, issue_date: "2024-03-28", total: 450.00, status: Some("Cancelled") },
    InvoiceSeed { number: "INV-2024-008", customer_id: 3, issue_date: "2024-04-09", total: 1980.00, status: None },
];

pub const INVOICE_DETAILS: &[InvoiceDetailSeed] = &[
    InvoiceDetailSeed { invoice_id: 1, description: "Web development services (hours)", quantity: 10, unit_price: 150.00 },
    InvoiceDetailSeed { invoice_id: 2, description: "Cloud hosting, annual plan", quantity: 1, unit_price: 2400.00 },
    InvoiceDetailSeed { invoice_id: 3, description: "Technical support (hours)", quantity: 5, unit_price: 95.00 },
    InvoiceDetailSeed { invoice_id: 3, description: "SSL certificate renewal", quantity: 1, unit_price: 400.50 },
    InvoiceDetailSeed { invoice_id: 4, description: "Database migration", quantity: 1, unit_price: 3200.00 },
    InvoiceDetailSeed { invoice_id: 5, description: "Network audit (hours)", quantity: 8, unit_price: 80.00 },
    InvoiceDetailSeed { invoice_id: 6, description: "ERP license seat", quantity: 5, unit_price: 2500.00 },
    InvoiceDetailSeed { invoice_id: 7, description: "Security training workshop (seats)", quantity: 3, unit_price: 150.00 },
    InvoiceDetailSeed { invoice_id: 8, description: "Penetration test", quantity: 1, unit_price: 1980.00 },
];

/// What a fixture load did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The primary table already held this many rows; nothing was inserted
    AlreadyPopulated(usize),
    /// Rows inserted across all tables
    Inserted(usize),
}

/// Insert the variant's fixtures unless its primary table already has rows
pub fn seed(store: &Store, variant: Variant) -> Result<SeedOutcome> {
    store.with_connection(|conn| {
        let existing = count_rows(conn, variant.primary_table())?;
        if existing > 0 {
            tracing::info!(existing, table = variant.primary_table(), "fixtures already present");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let statements = insert_statements(variant);
        for sql in &statements {
            execute_literal(conn, sql)?;
        }
        tracing::info!(rows = statements.len(), %variant, "fixtures inserted");
        Ok(SeedOutcome::Inserted(statements.len()))
    })
}

/// The literal INSERT statements for a variant, in insertion order
pub fn insert_statements(variant: Variant) -> Vec<String> {
    match variant {
        Variant::Customers => CUSTOMERS.iter().map(insert_customer).collect(),
        Variant::Invoices => INVOICE_CUSTOMERS
            .iter()
            .map(insert_customer)
            .chain(INVOICES.iter().map(insert_invoice))
            .chain(INVOICE_DETAILS.iter().map(insert_detail))
            .collect(),
    }
}

fn execute_literal(conn: &Connection, sql: &str) -> Result<()> {
    tracing::debug!(%sql, "seeding");
    conn.execute(sql, [])?;
    Ok(())
}

fn insert_customer(c: &CustomerSeed) -> String {
    match c.country {
        Some(country) => format!(
            "INSERT INTO Customers (Name, Email, Phone, Country) VALUES ({}, {}, {}, {})",
            literal(c.name),
            literal(c.email),
            literal(c.phone),
            literal(country)
        ),
        None => format!(
            "INSERT INTO Customers (Name, Email, Phone) VALUES ({}, {}, {})",
            literal(c.name),
            literal(c.email),
            literal(c.phone)
        ),
    }
}

fn insert_invoice(i: &InvoiceSeed) -> String {
    match i.status {
        Some(status) => format!(
            "INSERT INTO Invoices (InvoiceNumber, CustomerId, IssueDate, Total, Status) VALUES ({}, {}, {}, {:.2}, {})",
            literal(i.number),
            i.customer_id,
            literal(i.issue_date),
            i.total,
            literal(status)
        ),
        None => format!(
            "INSERT INTO Invoices (InvoiceNumber, CustomerId, IssueDate, Total) VALUES ({}, {}, {}, {:.2})",
            literal(i.number),
            i.customer_id,
            literal(i.issue_date),
            i.total
        ),
    }
}

fn insert_detail(d: &InvoiceDetailSeed) -> String {
    format!(
        "INSERT INTO InvoiceDetails (InvoiceId, Description, Quantity, UnitPrice) VALUES ({}, {}, {}, {:.2})",
        d.invoice_id,
        literal(d.description),
        d.quantity,
        d.unit_price
    )
}

/// Quote a fixture string as an SQL literal
fn literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded(variant: Variant) -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("seed.db"));
        store.initialize_schema(variant).unwrap();
        (dir, store)
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(CUSTOMERS.len(), 8);
        assert_eq!(INVOICE_CUSTOMERS.len(), 5);
        assert_eq!(INVOICES.len(), 8);
        assert_eq!(INVOICE_DETAILS.len(), 9);
        assert_eq!(insert_statements(Variant::Invoices).len(), 22);
    }

    #[test]
    fn test_invoice_totals_match_details() {
        for (idx, invoice) in INVOICES.iter().enumerate() {
            let id = idx as i64 + 1;
            let lines: f64 = INVOICE_DETAILS
                .iter()
                .filter(|d| d.invoice_id == id)
                .map(InvoiceDetailSeed::line_total)
                .sum();
            assert!((lines - invoice.total).abs() < 0.005, "{}", invoice.number);
        }
    }

    #[test]
    fn test_literal_doubles_quotes() {
        assert_eq!(literal("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn test_seed_is_idempotent() {
        for variant in Variant::all() {
            let (_dir, store) = seeded(*variant);
            let first = seed(&store, *variant).unwrap();
            let after_first = store.count_rows(variant.primary_table()).unwrap();
            let second = seed(&store, *variant).unwrap();
            let after_second = store.count_rows(variant.primary_table()).unwrap();

            assert!(matches!(first, SeedOutcome::Inserted(_)));
            assert_eq!(second, SeedOutcome::AlreadyPopulated(after_first));
            assert_eq!(after_first, after_second);
        }
    }

    #[test]
    fn test_seed_counts_per_table() {
        let (_dir, store) = seeded(Variant::Invoices);
        assert_eq!(seed(&store, Variant::Invoices).unwrap(), SeedOutcome::Inserted(22));
        assert_eq!(store.count_rows("Customers").unwrap(), 5);
        assert_eq!(store.count_rows("Invoices").unwrap(), 8);
        assert_eq!(store.count_rows("InvoiceDetails").unwrap(), 9);
    }

    #[test]
    fn test_status_default_applies() {
        let (_dir, store) = seeded(Variant::Invoices);
        seed(&store, Variant::Invoices).unwrap();
        let invoices = store.list_invoices().unwrap();
        assert_eq!(invoices[2].number, "INV-2024-003");
        assert_eq!(invoices[2].status, "Pending");
        assert_eq!(invoices[0].status, "Paid");
    }

    #[test]
    fn test_seed_without_schema_fails() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("empty.db"));
        let err = seed(&store, Variant::Customers).unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }
}
