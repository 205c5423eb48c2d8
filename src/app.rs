//! Demo operations
//!
//! Each operation opens its own connection through [`Store`], catches any
//! failure at its boundary and reports it on the printer. Nothing here is
//! fatal to the session.

use std::io::{self, Write};
use crate::fixtures::{self, SeedOutcome};
use crate::model::{Customer, InvoiceSummary};
use crate::query::{LookupOutcome, LookupQuery};
use crate::ui::{report, Icons, Printer};
use crate::{Result, Store, Variant};

/// Everything list-all can return
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Customers(Vec<Customer>),
    Invoices(Vec<InvoiceSummary>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Customers(rows) => rows.len(),
            Listing::Invoices(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The demo bound to one store and one schema variant
#[derive(Debug, Clone)]
pub struct DemoApp {
    store: Store,
    variant: Variant,
}

impl DemoApp {
    pub fn new(store: Store, variant: Variant) -> Self {
        Self { store, variant }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    // ========== Setup ==========

    pub fn initialize(&self) -> Result<()> {
        self.store.initialize_schema(self.variant)?;
        tracing::info!(variant = %self.variant, db = %self.store.path().display(), "schema ready");
        Ok(())
    }

    pub fn seed(&self) -> Result<SeedOutcome> {
        fixtures::seed(&self.store, self.variant)
    }

    /// Create the schema and load fixtures, reporting each step
    pub fn startup<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<()> {
        match self.initialize() {
            Ok(()) => printer.success("Database initialized successfully")?,
            Err(e) => {
                tracing::warn!(error = %e, "schema initialization failed");
                printer.failure(&format!("Error initializing database: {}", e))?;
            }
        }

        match self.seed() {
            Ok(SeedOutcome::AlreadyPopulated(_)) => {
                printer.success("Sample data already exists in the database")
            }
            Ok(SeedOutcome::Inserted(_)) => {
                printer.success(&format!("Sample {} inserted successfully", self.variant.entity_plural()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "fixture load failed");
                printer.failure(&format!("Error inserting data: {}", e))
            }
        }
    }

    // ========== Queries ==========

    pub fn lookup(&self, query: &LookupQuery) -> Result<LookupOutcome> {
        query.execute(&self.store)
    }

    pub fn list_all(&self) -> Result<Listing> {
        match self.variant {
            Variant::Customers => Ok(Listing::Customers(self.store.list_customers(self.variant)?)),
            Variant::Invoices => Ok(Listing::Invoices(self.store.list_invoices()?)),
        }
    }

    // ========== Handlers ==========

    /// Splice `raw` into the lookup, show the resulting text, then run it
    pub fn vulnerable_lookup<W: Write>(&self, raw: &str, printer: &mut Printer<W>) -> io::Result<()> {
        let query = LookupQuery::vulnerable(self.variant, raw);

        printer.blank()?;
        printer.warn("VULNERABLE QUERY:")?;
        printer.blank()?;
        printer.query(&query.sql)?;
        printer.blank()?;
        printer.line("Examples of SQL Injection you can try:")?;
        for (payload, effect) in self.variant.injection_hints() {
            printer.bullet(payload, effect)?;
        }
        printer.blank()?;

        self.run_lookup(&query, printer)
    }

    /// Bind `raw` to the placeholder, show template and value separately, then run it
    pub fn safe_lookup<W: Write>(&self, raw: &str, printer: &mut Printer<W>) -> io::Result<()> {
        let query = LookupQuery::safe(self.variant, raw);

        printer.blank()?;
        printer.success("SAFE QUERY (with prepared parameters):")?;
        printer.blank()?;
        printer.query(&query.sql)?;
        if let Some(param) = &query.param {
            printer.line(&format!("Parameter {} = '{}'", param.name, param.value))?;
        }
        printer.blank()?;

        self.run_lookup(&query, printer)
    }

    pub fn list_all_handler<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<()> {
        printer.blank()?;
        printer.line(&format!(
            "{} ALL {}:",
            Icons::CLIPBOARD,
            self.variant.entity_plural().to_uppercase()
        ))?;
        printer.blank()?;

        match self.list_all() {
            Ok(Listing::Customers(rows)) => report::customers(printer, &rows),
            Ok(Listing::Invoices(rows)) => report::invoices(printer, &rows),
            Err(e) => {
                tracing::warn!(error = %e, "list-all failed");
                printer.error(&e.to_string())
            }
        }
    }

    fn run_lookup<W: Write>(&self, query: &LookupQuery, printer: &mut Printer<W>) -> io::Result<()> {
        match self.lookup(query) {
            Ok(outcome) => {
                if outcome.statements > 1 {
                    let note = printer.muted(&format!("{} statements executed", outcome.statements));
                    printer.line(&note)?;
                }
                report::records(printer, self.variant, &outcome.rows)
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = ?query.mode, "lookup failed");
                printer.error(&e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{CUSTOMERS, INVOICES, INVOICE_CUSTOMERS};
    use rusqlite::types::Value;
    use tempfile::TempDir;

    fn ready(variant: Variant) -> (TempDir, DemoApp) {
        let dir = TempDir::new().unwrap();
        let app = DemoApp::new(Store::new(dir.path().join("app.db")), variant);
        app.initialize().unwrap();
        app.seed().unwrap();
        (dir, app)
    }

    fn transcript(f: impl FnOnce(&mut Printer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut printer = Printer::plain(Vec::new());
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_safe_lookup_round_trips_fixture() {
        let (_dir, app) = ready(Variant::Customers);
        for (idx, seed) in CUSTOMERS.iter().enumerate() {
            let id = (idx + 1).to_string();
            let outcome = app.lookup(&LookupQuery::safe(Variant::Customers, &id)).unwrap();
            assert_eq!(outcome.rows.len(), 1);
            let row = &outcome.rows[0];
            assert_eq!(row.get_i64("CustomerId"), Some(idx as i64 + 1));
            assert_eq!(row.get_text("Name"), Some(seed.name));
            assert_eq!(row.get_text("Email"), Some(seed.email));
            assert_eq!(row.get_text("Phone"), Some(seed.phone));
            assert_eq!(row.get_text("Country"), seed.country);
        }
    }

    // DECIMAL columns come back as Integer when the amount is whole
    fn amount(value: Option<&Value>) -> Option<f64> {
        match value? {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }

    #[test]
    fn test_safe_lookup_round_trips_invoice() {
        let (_dir, app) = ready(Variant::Invoices);
        let outcome = app.lookup(&LookupQuery::safe(Variant::Invoices, "1")).unwrap();
        assert_eq!(outcome.rows.len(), 1);

        let row = &outcome.rows[0];
        let seed = &INVOICES[0];
        assert_eq!(row.get_i64("InvoiceId"), Some(1));
        assert_eq!(row.get_text("InvoiceNumber"), Some(seed.number));
        assert_eq!(row.get_text("CustomerName"), Some(INVOICE_CUSTOMERS[0].name));
        assert_eq!(row.get_text("IssueDate"), Some(seed.issue_date));
        assert_eq!(amount(row.get("Total")), Some(1500.0));
        assert_eq!(row.get_text("Status"), seed.status);
    }

    #[test]
    fn test_safe_lookup_never_widens() {
        for variant in Variant::all() {
            let (_dir, app) = ready(*variant);
            for payload in [
                "1 OR 1=1",
                "1; DROP TABLE Customers; --",
                "1 UNION SELECT * FROM Customers --",
                "' OR ''='",
                "",
            ] {
                let outcome = app.lookup(&LookupQuery::safe(*variant, payload)).unwrap();
                assert!(outcome.rows.is_empty(), "{} widened on {:?}", variant, payload);
            }
            assert!(app.store().table_exists("Customers").unwrap());
        }
    }

    #[test]
    fn test_vulnerable_lookup_widens_on_tautology() {
        let (_dir, app) = ready(Variant::Customers);
        let single = app.lookup(&LookupQuery::vulnerable(Variant::Customers, "1")).unwrap();
        assert_eq!(single.rows.len(), 1);

        let all = app.lookup(&LookupQuery::vulnerable(Variant::Customers, "1 OR 1=1")).unwrap();
        assert_eq!(all.rows.len(), CUSTOMERS.len());

        let (_dir, app) = ready(Variant::Invoices);
        let all = app.lookup(&LookupQuery::vulnerable(Variant::Invoices, "1 OR 1=1")).unwrap();
        assert_eq!(all.rows.len(), INVOICES.len());
    }

    #[test]
    fn test_vulnerable_union_reads_other_columns() {
        let (_dir, app) = ready(Variant::Invoices);
        let payload = Variant::Invoices.injection_hints()[2].0;
        let outcome = app.lookup(&LookupQuery::vulnerable(Variant::Invoices, payload)).unwrap();
        assert_eq!(outcome.rows.len(), 5);
        assert!(outcome
            .rows
            .iter()
            .any(|row| row.get_text("InvoiceNumber") == Some("billing@acme.example.com")));
    }

    #[test]
    fn test_vulnerable_stacked_statement_drops_table() {
        let (_dir, app) = ready(Variant::Customers);
        let outcome = app
            .lookup(&LookupQuery::vulnerable(Variant::Customers, "1; DROP TABLE Customers; --"))
            .unwrap();
        assert_eq!(outcome.statements, 2);
        assert_eq!(outcome.rows.len(), 1);
        assert!(!app.store().table_exists("Customers").unwrap());

        let out = transcript(|p| app.list_all_handler(p));
        assert!(out.contains("❌ Error: no such table: Customers"));
    }

    #[test]
    fn test_foreign_keys_block_dropping_referenced_table() {
        let (_dir, app) = ready(Variant::Invoices);
        let err = app
            .lookup(&LookupQuery::vulnerable(Variant::Invoices, "1; DROP TABLE Customers; --"))
            .unwrap_err();
        assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
        assert!(app.store().table_exists("Customers").unwrap());
    }

    #[test]
    fn test_malformed_vulnerable_input_reports_error() {
        let (_dir, app) = ready(Variant::Customers);
        let out = transcript(|p| app.vulnerable_lookup("1 OR", p));
        assert!(out.contains("WHERE CustomerId = 1 OR\n"));
        assert!(out.contains("❌ Error:"));
        assert!(!out.contains("Results:"));
    }

    #[test]
    fn test_list_all_is_ordered_and_counted() {
        let (_dir, app) = ready(Variant::Customers);
        let Listing::Customers(rows) = app.list_all().unwrap() else {
            panic!("expected customers");
        };
        assert_eq!(rows.len(), app.store().count_rows("Customers").unwrap());
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));

        let (_dir, app) = ready(Variant::Invoices);
        let listing = app.list_all().unwrap();
        assert_eq!(listing.len(), 8);
        let out = transcript(|p| app.list_all_handler(p));
        assert!(out.contains("ALL INVOICES:"));
        assert!(out.contains("Total: 8 invoices"));
        assert!(out.contains("$23,545.50"));
    }

    #[test]
    fn test_startup_reports_existing_data() {
        let (_dir, app) = ready(Variant::Customers);
        let out = transcript(|p| app.startup(p));
        assert_eq!(
            out,
            "✓ Database initialized successfully\n✓ Sample data already exists in the database\n"
        );
    }

    #[test]
    fn test_startup_survives_unwritable_store() {
        let dir = TempDir::new().unwrap();
        let app = DemoApp::new(Store::new(dir.path().join("missing").join("x.db")), Variant::Customers);
        let out = transcript(|p| app.startup(p));
        assert!(out.contains("Error initializing database:"));
        assert!(out.contains("Error inserting data:"));
    }
}
