use crate::ui::{Icons, Theme};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Styled line output over any sink.
///
/// Everything the demo shows, including errors, goes through one sink so a
/// session transcript can be captured whole.
pub struct Printer<W: Write> {
    out: W,
    theme: Theme,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn plain(out: W) -> Self {
        Self::new(out, Theme::plain())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write without a newline and flush, for input prompts
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", text.style(self.theme.header.clone()))
    }

    pub fn success(&mut self, label: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            Icons::CHECK.style(self.theme.success.clone()),
            label.style(self.theme.success.clone())
        )
    }

    /// Operation failure, rendered as one `❌ Error:` line
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            Icons::CROSS,
            format!("Error: {}", message).style(self.theme.error.clone())
        )
    }

    /// Setup failure line, e.g. `Error initializing database: ...`
    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.style(self.theme.error.clone()))
    }

    pub fn warn(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", Icons::WARN, label.style(self.theme.warn.clone()))
    }

    pub fn query(&mut self, sql: &str) -> io::Result<()> {
        writeln!(self.out, "{}", sql.style(self.theme.query.clone()))
    }

    pub fn bullet(&mut self, text: &str, note: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "  {} {}   {}",
            Icons::BULLET,
            text,
            format!("({})", note).style(self.theme.dim.clone())
        )
    }

    pub fn summary(&mut self, label: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", label.style(self.theme.dim.clone()), value)
    }

    pub fn muted(&self, text: &str) -> String {
        text.style(self.theme.muted.clone()).to_string()
    }
}
