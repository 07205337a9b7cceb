//! Command definitions
//!
//! Console verbs, one per action the original form exposed as a button or
//! menu entry.

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a new item (prompts for id, description, location)
    Add,

    /// Find an item by id
    Find,

    /// Remove an item by id
    Remove,

    /// Show all items ordered by description
    List,

    /// Show usage
    Help,

    /// Leave the program
    Quit,
}

impl Command {
    /// Parse a command from an input line
    ///
    /// Matching is case-insensitive and tolerates surrounding whitespace.
    /// Returns `None` for blank lines and unrecognized verbs.
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "add" | "a" => Some(Command::Add),
            "find" | "f" => Some(Command::Find),
            "remove" | "rm" | "r" => Some(Command::Remove),
            "list" | "ls" | "l" => Some(Command::List),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}
