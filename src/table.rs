use crate::config::CommandEntry;
use crate::error::{Result, TerminalError};
use std::collections::BTreeMap;

/// Commands whose output is computed by the session rather than read from
/// the table. They only answer when the table defines their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Clear,
    List,
    History,
    Cd,
}

impl BuiltinKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(BuiltinKind::Clear),
            "ls" => Some(BuiltinKind::List),
            "history" => Some(BuiltinKind::History),
            "cd" => Some(BuiltinKind::Cd),
            _ => None,
        }
    }
}

/// What a command token names, decided once per input.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Builtin(BuiltinKind, &'a CommandEntry),
    Entry(&'a CommandEntry),
}

impl<'a> Target<'a> {
    pub fn entry(&self) -> &'a CommandEntry {
        match self {
            Target::Builtin(_, entry) | Target::Entry(entry) => entry,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Text(String),
    Builtin(BuiltinKind),
}

pub enum TableState {
    /// Configuration has not arrived yet; every lookup fails.
    NotReady,
    Ready(BTreeMap<String, CommandEntry>),
}

pub struct CommandTable {
    state: TableState,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        CommandTable {
            state: TableState::NotReady,
        }
    }

    pub fn from_commands(commands: BTreeMap<String, CommandEntry>) -> Self {
        CommandTable {
            state: TableState::Ready(commands),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, TableState::Ready(_))
    }

    fn commands(&self) -> Option<&BTreeMap<String, CommandEntry>> {
        match &self.state {
            TableState::Ready(commands) => Some(commands),
            TableState::NotReady => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands()?.get(name)
    }

    pub fn target(&self, name: &str) -> Option<Target<'_>> {
        let entry = self.get(name)?;
        Some(match BuiltinKind::from_name(name) {
            Some(kind) => Target::Builtin(kind, entry),
            None => Target::Entry(entry),
        })
    }

    pub fn resolve(&self, tokens: &[&str]) -> Result<Resolution> {
        let name = tokens.first().copied().unwrap_or_default();
        let target = self
            .target(name)
            .ok_or_else(|| TerminalError::UnknownCommand(name.to_string()))?;
        let entry = target.entry();
        if let (true, Some(sub)) = (entry.has_subcommands(), tokens.get(1)) {
            return entry
                .subcommands
                .get(*sub)
                .map(|s| Resolution::Text(s.output_text().to_string()))
                .ok_or_else(|| TerminalError::UnknownSubcommand {
                    command: name.to_string(),
                    sub: sub.to_string(),
                });
        }
        Ok(match target {
            Target::Builtin(kind, _) => Resolution::Builtin(kind),
            Target::Entry(entry) => Resolution::Text(entry.output_text().to_string()),
        })
    }

    /// Sorted top-level names starting with `prefix`.
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.commands()
            .map(|c| matching_keys(c, prefix))
            .unwrap_or_default()
    }

    /// Sorted subcommand names of `command` starting with `prefix`.
    /// `None` when `command` is unknown or has no subcommands.
    pub fn subcommands_with_prefix(&self, command: &str, prefix: &str) -> Option<Vec<String>> {
        let entry = self.get(command).filter(|e| e.has_subcommands())?;
        Some(matching_keys(&entry.subcommands, prefix))
    }

    pub fn help_lines(&self) -> Vec<String> {
        let mut lines = vec!["Commands:".to_string()];
        let Some(commands) = self.commands() else {
            return lines;
        };
        for (name, entry) in commands.iter().filter(|(_, e)| !e.hidden) {
            lines.push(format!("{}: {}", name, entry.description));
            for (sub_name, sub) in entry.subcommands.iter().filter(|(_, s)| !s.hidden) {
                lines.push(format!("  ⇒ {}: {}", sub_name, sub.description));
            }
        }
        lines
    }
}

fn matching_keys(map: &BTreeMap<String, CommandEntry>, prefix: &str) -> Vec<String> {
    map.keys()
        .filter(|name| name.starts_with(prefix))
        .cloned()
        .collect()
}
