//! Command registry
//!
//! Name-to-handler bindings with help text. The host feeds extended command
//! lines here; handlers return an optional response string (the list
//! commands respond, mutators stay silent) or a typed error.

use crate::args::{split_command, CommandArgs};
use objexclude_core::{CommandError, Result};
use std::collections::HashMap;

/// Type alias for command handler functions
pub type CommandHandler = Box<dyn Fn(&CommandArgs) -> Result<Option<String>> + Send>;

struct CommandEntry {
    help: String,
    handler: CommandHandler,
}

/// Registry binding command keywords to handlers
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandEntry>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a keyword to a handler with its help text
    pub fn register<F>(&mut self, name: &str, help: &str, handler: F)
    where
        F: Fn(&CommandArgs) -> Result<Option<String>> + Send + 'static,
    {
        self.commands.insert(
            name.to_uppercase(),
            CommandEntry {
                help: help.to_string(),
                handler: Box::new(handler),
            },
        );
    }

    /// True when `name` is a registered keyword
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_uppercase())
    }

    /// Help text for a registered command
    pub fn help(&self, name: &str) -> Option<&str> {
        self.commands
            .get(&name.to_uppercase())
            .map(|e| e.help.as_str())
    }

    /// Registered keywords and their help text (order unspecified)
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.help.as_str()))
    }

    /// Parse and execute one command line
    ///
    /// Returns the handler's optional response. A failure rejects only this
    /// command; the registry stays usable.
    pub fn dispatch(&self, line: &str) -> Result<Option<String>> {
        let Some((keyword, args)) = split_command(line) else {
            return Ok(None);
        };
        tracing::debug!(command = %keyword, "dispatching");
        let entry = self
            .commands
            .get(&keyword)
            .ok_or_else(|| CommandError::UnknownCommand { name: keyword })?;
        (entry.handler)(&args)
    }
}
