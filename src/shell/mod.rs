//! Interactive text shell driving the contact store.
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so the same
//! code serves the terminal and scripted sessions in tests. Logging goes
//! through `tracing` and never touches the session output.

pub mod handlers;
pub mod menu;

pub use menu::{MenuChoice, MENU_TITLE};

use crate::error::MenuError;
use crate::metrics::SessionMetrics;
use crate::repositories::ContactRepository;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Whether the session keeps going after a step.
///
/// `Break` means input ran out mid-operation.
pub(crate) type Step = io::Result<ControlFlow<()>>;

/// One interactive session over a contact repository.
pub struct Shell<R, I, O> {
    repo: R,
    input: I,
    output: O,
    metrics: SessionMetrics,
}

impl<R, I, O> Shell<R, I, O>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    /// Create a shell that owns `repo` and talks over `input` / `output`.
    pub fn new(repo: R, input: I, output: O) -> Self {
        Self {
            repo,
            input,
            output,
            metrics: SessionMetrics::new(),
        }
    }

    /// Record session counters into an existing collector.
    pub fn with_metrics(mut self, metrics: SessionMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Consume the shell, returning the repository and the output sink.
    pub fn into_parts(self) -> (R, O) {
        (self.repo, self.output)
    }

    /// Run the menu loop until Exit is chosen or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        info!(capacity = self.repo.capacity(), "Session started");

        loop {
            self.print_menu()?;

            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => {
                    info!("Input exhausted, ending session");
                    break;
                }
            };
            debug!(?choice, "Menu choice accepted");

            let step = match choice {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::Search => self.handle_search()?,
                MenuChoice::Display => self.handle_display()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program... Thankyou!")?;
                    break;
                }
            };

            if step.is_break() {
                info!("Input exhausted, ending session");
                break;
            }
        }

        self.output.flush()?;
        let summary = self.metrics.summary();
        info!(
            added = summary.contacts_added_total,
            deleted = summary.contacts_deleted_total,
            searches = summary.searches_total,
            missed = summary.lookups_missed_total,
            rejected = summary.inputs_rejected_total,
            remaining = self.repo.len(),
            "Session ended"
        );
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", MENU_TITLE)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    /// Prompt until a valid menu number is entered. `None` on end of input.
    ///
    /// Blank lines are skipped silently, without a new prompt.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        let mut next = self.prompt("Enter your choice: ")?;
        loop {
            let line = match next {
                Some(line) => line,
                None => return Ok(None),
            };

            if line.trim().is_empty() {
                next = self.read_line()?;
                continue;
            }

            match line.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    let message = match &err {
                        MenuError::NotANumber(_) => "Invalid input.",
                        MenuError::OutOfRange(_) => "Invalid choice.",
                    };
                    debug!(%err, "Rejected menu input");
                    self.metrics.record_input_rejected();
                    writeln!(
                        self.output,
                        "{} Please enter a number between 1 and 5.",
                        message
                    )?;
                }
            }
            next = self.prompt("Enter your choice: ")?;
        }
    }

    /// Write `text` without a newline, then read one line.
    pub(crate) fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with its terminator removed. `None` on end of input.
    ///
    /// Invalid UTF-8 is replaced rather than treated as fatal; the
    /// replacement character then fails field validation.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
