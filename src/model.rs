//! Typed rows for both demo schemas.
//!
//! `*Seed` structs are the literal fixture tuples; the remaining structs are
//! read back from the store by the listing queries.

/// A customer fixture row (both variants; `country` only exists in variant 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub country: Option<&'static str>,
}

/// An invoice fixture row. `status: None` leaves the column default in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceSeed {
    pub number: &'static str,
    pub customer_id: i64,
    pub issue_date: &'static str,
    pub total: f64,
    pub status: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceDetailSeed {
    pub invoice_id: i64,
    pub description: &'static str,
    pub quantity: i64,
    pub unit_price: f64,
}

impl InvoiceDetailSeed {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// A customer as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: Option<String>,
}

/// An invoice joined with its customer's name
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub id: i64,
    pub number: String,
    pub customer_name: String,
    pub issue_date: String,
    pub total: f64,
    pub status: String,
}
