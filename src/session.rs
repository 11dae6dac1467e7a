//! Interactive menu session over a record list.
//!
//! The session reads choices line by line and writes everything it shows to
//! a single writer, so it runs the same against a terminal or a buffer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::container::RecordList;
use crate::display::render_table;

const MENU: &str = "\n==== Object Tracker ====\n\
                    1. Search objects by name\n\
                    2. Sort objects by date\n\
                    3. Exit\n\
                    ===========================\n";

/// One menu selection, parsed from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Search by exact name.
    Search,
    /// Sort by timestamp.
    Sort,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Parses a menu line; `None` for anything but `1`, `2` or `3`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Search),
            "2" => Some(Self::Sort),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drives the numbered menu until the user exits or input runs out.
pub struct Session<'a, R, W> {
    records: &'a mut RecordList,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session over `records`.
    #[must_use]
    pub fn new(records: &'a mut RecordList, input: R, output: W) -> Self {
        Self { records, input, output }
    }

    /// Prints the generated records, then loops over the menu.
    ///
    /// End of input is treated like choosing exit.
    ///
    /// # Errors
    ///
    /// Returns an error string if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), String> {
        let count = self.records.len();
        self.print(&format!("Generated {count} random objects.\n\nAll objects:\n"))?;
        let all = render_table(&self.records.to_vec());
        self.print(&all)?;

        loop {
            self.print(MENU)?;
            let Some(line) = self.prompt("Enter your choice (1-3): ")? else {
                self.print("\nExiting the program.\n")?;
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu selection");
            match choice {
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Sort) => self.sort()?,
                Some(MenuChoice::Exit) => {
                    self.print("Exiting the program.\n")?;
                    return Ok(());
                }
                None => self.print("Invalid choice. Please enter 1, 2, or 3.\n")?,
            }
        }
    }

    fn search(&mut self) -> Result<(), String> {
        let name = self.prompt("Enter name to search for: ")?.unwrap_or_default();
        let results = self.records.search_by_name(&name);
        self.print(&format!("\nSearch results for '{name}':\n"))?;
        self.print(&render_table(&results))
    }

    fn sort(&mut self) -> Result<(), String> {
        self.print(
            "\nSort order:\n\
             1. Ascending (oldest to newest)\n\
             2. Descending (newest to oldest)\n",
        )?;
        let answer = self.prompt("Enter sort order (1 or 2): ")?.unwrap_or_default();
        let ascending = answer.trim() != "2";
        let direction = if ascending { "ascending" } else { "descending" };

        self.print(&format!("\nSorting objects by date in {direction} order:\n"))?;
        let sorted = self.records.sort_by_timestamp(ascending);
        self.print(&render_table(&sorted))
    }

    /// Writes `text`, flushes, and reads one line without its line ending.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, String> {
        self.print(text)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {e}"))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn print(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| format!("Failed to write output: {e}"))
    }
}
