//! Interactive menu
//!
//! A two-state machine: `Running` loops over show-menu / read / dispatch until
//! option 4 (or end of input) moves it to `Exited`. Dispatch is a pure
//! function, and [`Session`] reads lines from any `BufRead` and writes to any
//! `Write`, so a whole session can be driven from a string.

use std::io::{self, BufRead, Write};
use crate::ui::Printer;
use crate::DemoApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    VulnerableLookup,
    SafeLookup,
    ListAll,
    Exit,
}

impl MenuChoice {
    /// Exact match on the option number; anything else is not an option
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::VulnerableLookup),
            "2" => Some(MenuChoice::SafeLookup),
            "3" => Some(MenuChoice::ListAll),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Next state for a dispatched choice. `Exited` is terminal.
pub fn transition(state: MenuState, choice: Option<MenuChoice>) -> MenuState {
    match (state, choice) {
        (MenuState::Exited, _) => MenuState::Exited,
        (MenuState::Running, Some(MenuChoice::Exit)) => MenuState::Exited,
        (MenuState::Running, _) => MenuState::Running,
    }
}

/// One interactive run of the demo over a line source and a sink
pub struct Session<'a, R, W: Write> {
    app: &'a DemoApp,
    input: R,
    printer: Printer<W>,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(app: &'a DemoApp, input: R, printer: Printer<W>) -> Self {
        Self {
            app,
            input,
            printer,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    /// Loop until the menu exits
    pub fn run(&mut self) -> io::Result<()> {
        while self.state == MenuState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu, read one choice and act on it
    pub fn step(&mut self) -> io::Result<MenuState> {
        if self.state == MenuState::Exited {
            return Ok(self.state);
        }

        self.show_menu()?;
        let choice = match self.read_line()? {
            Some(line) => MenuChoice::parse(&line),
            None => {
                self.printer.blank()?;
                Some(MenuChoice::Exit)
            }
        };
        tracing::debug!(?choice, "menu dispatch");

        match choice {
            Some(MenuChoice::VulnerableLookup) => {
                let raw = self.ask_id("⚠️ VULNERABLE to SQL Injection!")?;
                self.app.vulnerable_lookup(&raw, &mut self.printer)?;
            }
            Some(MenuChoice::SafeLookup) => {
                let raw = self.ask_id("✓ SAFE with parameters")?;
                self.app.safe_lookup(&raw, &mut self.printer)?;
            }
            Some(MenuChoice::ListAll) => self.app.list_all_handler(&mut self.printer)?,
            Some(MenuChoice::Exit) => self.printer.line("Goodbye!")?,
            None => self.printer.line("Invalid option")?,
        }

        self.state = transition(self.state, choice);
        Ok(self.state)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let variant = self.app.variant();
        let entity = variant.entity();
        self.printer.header(variant.menu_title())?;
        self.printer.line(&format!("1. Search {} by ID (VULNERABLE)", entity))?;
        self.printer.line(&format!("2. Search {} by ID (SAFE with parameters)", entity))?;
        self.printer.line(&format!("3. List all {}", variant.entity_plural()))?;
        self.printer.line("4. Exit")?;
        self.printer.prompt("Select an option: ")
    }

    fn ask_id(&mut self, note: &str) -> io::Result<String> {
        self.printer.blank()?;
        self.printer
            .prompt(&format!("Enter {} ID ({}): ", self.app.variant().entity(), note))?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// One line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
