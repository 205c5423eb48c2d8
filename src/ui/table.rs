use crate::model::InvoiceSummary;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct InvoiceRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Number")]
    pub number: String,
    #[tabled(rename = "Customer")]
    pub customer: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&InvoiceSummary> for InvoiceRow {
    fn from(invoice: &InvoiceSummary) -> Self {
        Self {
            id: invoice.id,
            number: invoice.number.clone(),
            customer: invoice.customer_name.clone(),
            date: invoice.issue_date.clone(),
            total: format_currency(invoice.total),
            status: invoice.status.clone(),
        }
    }
}

/// Fixed-width invoice listing with column headers
pub fn invoice_table(invoices: &[InvoiceSummary]) -> String {
    let rows: Vec<InvoiceRow> = invoices.iter().map(InvoiceRow::from).collect();
    Table::new(rows).with(Style::modern()).to_string()
}

/// `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
