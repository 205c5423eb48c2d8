pub mod icons;
pub mod output;
pub mod report;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::Printer;
pub use table::{format_currency, invoice_table};
pub use theme::{theme, Theme};
