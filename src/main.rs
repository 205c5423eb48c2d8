//! sqli-demo CLI - interactive SQL injection demonstration

use clap::Parser;
use std::io;
use std::path::PathBuf;
use sqli_demo::config::{self, Overrides};
use sqli_demo::ui::{theme, Printer};
use sqli_demo::{DemoApp, Session, Store, Variant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sqli-demo")]
#[command(version)]
#[command(about = "Compare string-concatenated SQL with parameterized queries on a local SQLite file")]
#[command(long_about = r#"
sqli-demo opens (or creates) a small SQLite database, seeds it once, and
offers a menu with two lookups of the same row:
  • a VULNERABLE lookup that pastes your input into the SQL text
  • a SAFE lookup that binds your input as a parameter

Try `1 OR 1=1` in both and compare the results.

Example usage:
  sqli-demo
  sqli-demo --variant invoices
"#)]
struct Cli {
    /// Schema to run against (customers, invoices)
    #[arg(long, value_parser = parse_variant)]
    variant: Option<Variant>,

    /// Path to the database file (defaults to customers.db / invoices.db)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to an optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not enable SQLite foreign key enforcement
    #[arg(long)]
    no_foreign_keys: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse().map_err(|e: sqli_demo::Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SQLI_DEMO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;
    let overrides = Overrides {
        variant: cli.variant,
        database: cli.database,
        no_foreign_keys: cli.no_foreign_keys,
    };
    let settings = config::resolve(&overrides, file_config.as_ref());
    tracing::debug!(?settings, "resolved settings");

    config::ensure_db_dir(&settings.database)?;
    let store = Store::new(&settings.database).with_foreign_keys(settings.foreign_keys);
    let app = DemoApp::new(store, settings.variant);

    let mut printer = Printer::new(io::stdout().lock(), theme().clone());
    app.startup(&mut printer)?;

    let mut session = Session::new(&app, io::stdin().lock(), printer);
    session.run()?;

    Ok(())
}
