//! Rendering of lookup results and listings

use std::io::{self, Write};
use rusqlite::types::Value;
use crate::model::{Customer, InvoiceSummary};
use crate::storage::{display_value, Record};
use crate::ui::table::{format_currency, invoice_table};
use crate::ui::{Icons, Printer};
use crate::Variant;

/// Display label for a result column
pub fn column_label(column: &str) -> &str {
    match column {
        "CustomerId" | "InvoiceId" => "ID",
        "InvoiceNumber" => "Number",
        "CustomerName" => "Customer",
        "IssueDate" => "Date",
        other => other,
    }
}

/// One line per record: `  ID: 1, Name: John Smith, ...`
pub fn record_line(record: &Record) -> String {
    let fields: Vec<String> = record
        .columns()
        .iter()
        .map(|(column, value)| {
            let rendered = match (column.as_str(), value) {
                ("Total", Value::Integer(i)) => format_currency(*i as f64),
                ("Total", Value::Real(f)) => format_currency(*f),
                _ => display_value(value),
            };
            format!("{}: {}", column_label(column), rendered)
        })
        .collect();
    format!("  {}", fields.join(", "))
}

pub fn records<W: Write>(printer: &mut Printer<W>, variant: Variant, rows: &[Record]) -> io::Result<()> {
    if rows.is_empty() {
        return printer.line(&format!("No {} found", variant.entity_plural()));
    }
    printer.line(&format!("{} Results:", Icons::CLIPBOARD))?;
    for row in rows {
        printer.line(&record_line(row))?;
    }
    Ok(())
}

pub fn customer_line(customer: &Customer) -> String {
    let mut line = format!(
        "[{}] {} | Email: {} | Phone: {}",
        customer.id, customer.name, customer.email, customer.phone
    );
    if let Some(country) = &customer.country {
        line.push_str(&format!(" | Country: {}", country));
    }
    line
}

pub fn customers<W: Write>(printer: &mut Printer<W>, customers: &[Customer]) -> io::Result<()> {
    for customer in customers {
        printer.line(&customer_line(customer))?;
    }
    printer.blank()?;
    printer.line(&format!("Total: {} customers", customers.len()))
}

pub fn invoices<W: Write>(printer: &mut Printer<W>, invoices: &[InvoiceSummary]) -> io::Result<()> {
    if !invoices.is_empty() {
        printer.line(&invoice_table(invoices))?;
    }
    printer.blank()?;
    printer.line(&format!("Total: {} invoices", invoices.len()))?;
    let grand_total: f64 = invoices.iter().map(|i| i.total).sum();
    printer.summary("Invoiced amount:", &format_currency(grand_total))
}
