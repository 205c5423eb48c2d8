//! Database schema definitions

use crate::Variant;

/// SQL to create the customers table (variant 1)
pub const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Customers (
    CustomerId INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Email TEXT NOT NULL,
    Phone TEXT NOT NULL,
    Country TEXT NOT NULL
)
"#;

/// SQL to create the customers table (variant 2, no country)
pub const CREATE_INVOICE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Customers (
    CustomerId INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Email TEXT NOT NULL,
    Phone TEXT NOT NULL
)
"#;

/// SQL to create the invoices table
pub const CREATE_INVOICES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Invoices (
    InvoiceId INTEGER PRIMARY KEY AUTOINCREMENT,
    InvoiceNumber TEXT NOT NULL UNIQUE,
    CustomerId INTEGER NOT NULL,
    IssueDate DATE NOT NULL,
    Total DECIMAL(10, 2) NOT NULL,
    Status TEXT NOT NULL DEFAULT 'Pending',
    FOREIGN KEY (CustomerId) REFERENCES Customers(CustomerId)
)
"#;

/// SQL to create the invoice detail lines table
pub const CREATE_INVOICE_DETAILS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS InvoiceDetails (
    DetailId INTEGER PRIMARY KEY AUTOINCREMENT,
    InvoiceId INTEGER NOT NULL,
    Description TEXT NOT NULL,
    Quantity INTEGER NOT NULL,
    UnitPrice DECIMAL(10, 2) NOT NULL,
    FOREIGN KEY (InvoiceId) REFERENCES Invoices(InvoiceId)
)
"#;

/// Schema creation statements for a variant, in dependency order
pub fn statements(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Customers => &[CREATE_CUSTOMERS_TABLE],
        Variant::Invoices => &[
            CREATE_INVOICE_CUSTOMERS_TABLE,
            CREATE_INVOICES_TABLE,
            CREATE_INVOICE_DETAILS_TABLE,
        ],
    }
}

/// Tables created for a variant
pub fn tables(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Customers => &["Customers"],
        Variant::Invoices => &["Customers", "Invoices", "InvoiceDetails"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_match_tables() {
        for variant in Variant::all() {
            let stmts = statements(*variant);
            let names = tables(*variant);
            assert_eq!(stmts.len(), names.len());
            for (stmt, name) in stmts.iter().zip(names) {
                assert!(stmt.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", name)));
            }
        }
    }
}
