//! Interactive console loop
//!
//! The terminal stand-in for the original form window: a verb prompt, a
//! per-field prompt for `add`, and a list refresh after every successful
//! mutation. Generic over the input and output streams so a whole session
//! can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::ui::command::Command;
use crate::ui::controller::Controller;

/// Tunables for a console session
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Prompt printed before each command
    pub prompt: String,

    /// Re-render the list after each successful add/remove
    pub auto_list: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            auto_list: true,
        }
    }
}

/// The interactive session
pub struct Console<R, W> {
    controller: Controller,
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session over the given streams
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            controller: Controller::new(),
            input,
            output,
            options,
        }
    }

    /// Run until `quit` or end of input
    ///
    /// The only error this returns is an I/O failure on one of the streams;
    /// store and input errors are rendered as messages and the loop goes on.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "stockroom {}", crate::VERSION)?;
        writeln!(self.output, "{}", Self::USAGE)?;

        loop {
            write!(self.output, "{}", self.options.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break; // end of input
            };

            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Add) => self.handle_add()?,
                Some(Command::Find) => self.handle_find()?,
                Some(Command::Remove) => self.handle_remove()?,
                Some(Command::List) => self.print_list()?,
                Some(Command::Help) => writeln!(self.output, "{}", Self::USAGE)?,
                Some(Command::Quit) => break,
                None => {
                    writeln!(self.output, "unknown command: {}", line.trim())?;
                    writeln!(self.output, "{}", Self::USAGE)?;
                }
            }
        }

        Ok(())
    }

    const USAGE: &'static str =
        "commands: add, find, remove, list, help, quit";

    fn handle_add(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_field("id")? else {
            return Ok(());
        };
        let Some(description) = self.prompt_field("description")? else {
            return Ok(());
        };
        let Some(location) = self.prompt_field("location")? else {
            return Ok(());
        };

        let reply = self.controller.submit_add(&id, &description, &location);
        let refresh = reply.is_info();
        self.print_reply(&reply.text, refresh)?;
        if refresh && self.options.auto_list {
            self.print_list()?;
        }
        Ok(())
    }

    fn handle_find(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_field("id")? else {
            return Ok(());
        };

        let reply = self.controller.submit_find(&id);
        self.print_reply(&reply.text, reply.is_info())
    }

    fn handle_remove(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_field("id")? else {
            return Ok(());
        };

        let reply = self.controller.submit_remove(&id);
        let refresh = reply.is_info();
        self.print_reply(&reply.text, refresh)?;
        if refresh && self.options.auto_list {
            self.print_list()?;
        }
        Ok(())
    }

    /// Ask for one field; `None` means the input stream ended
    fn prompt_field(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn print_reply(&mut self, text: &str, info: bool) -> io::Result<()> {
        if info {
            writeln!(self.output, "{text}")
        } else {
            writeln!(self.output, "warning: {text}")
        }
    }

    fn print_list(&mut self) -> io::Result<()> {
        let lines = self.controller.render_list();
        if lines.is_empty() {
            writeln!(self.output, "(no items)")?;
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
