use crate::{
    complete::{complete, CompletionOutcome},
    config::{LinkAction, TerminalConfig},
    confirm::{ActionTrigger, PromptState},
    history::HistoryLedger,
    table::{BuiltinKind, CommandTable, Resolution},
    vfs::Vfs,
};
use std::collections::BTreeMap;

pub const PROMPT: &str = "> ";
pub const CLEARED: &str = "Terminal Cleared!";
pub const HISTORY_CLEARED: &str = "History cleared.";

/// One item for the render sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Line(String),
    Clear,
}

impl Output {
    fn line(text: impl Into<String>) -> Self {
        Output::Line(text.into())
    }
}

/// Inputs handled before the command table is consulted.
enum Shortcut {
    Help,
    ClearHistory,
    Link(LinkAction),
}

/// Interpreter state for one browser tab.
///
/// Every input is processed to completion before the next one arrives, so
/// nothing here needs interior mutability.
pub struct Session {
    table: CommandTable,
    history: HistoryLedger,
    prompt: PromptState,
    fs: Vfs,
    links: BTreeMap<String, LinkAction>,
    banner: String,
    welcome: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session whose table has not loaded yet.
    pub fn new() -> Self {
        let defaults = TerminalConfig::default();
        Session {
            table: CommandTable::new(),
            history: HistoryLedger::new(),
            prompt: PromptState::Idle,
            fs: Vfs::default(),
            links: defaults.links,
            banner: defaults.ascii_art,
            welcome: defaults.welcome_message,
        }
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        let mut session = Self::new();
        session.install_config(config);
        session
    }

    pub fn install_config(&mut self, config: TerminalConfig) {
        log::info!(
            "command table ready: {} commands, {} links",
            config.commands.len(),
            config.links.len()
        );
        self.table = CommandTable::from_commands(config.commands);
        self.fs = Vfs::new(config.filesystem);
        self.links = config.links;
        self.banner = config.ascii_art;
        self.welcome = config.welcome_message;
    }

    pub fn is_ready(&self) -> bool {
        self.table.is_ready()
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.prompt.is_awaiting()
    }

    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Banner and welcome text, printed once the table is loaded.
    pub fn greeting(&self) -> Vec<Output> {
        [&self.banner, &self.welcome]
            .into_iter()
            .filter(|text| !text.is_empty())
            .map(|text| Output::line(text.as_str()))
            .collect()
    }

    pub fn submit(&mut self, line: &str, trigger: &mut dyn ActionTrigger) -> Vec<Output> {
        if self.prompt.is_awaiting() {
            return vec![Output::Line(self.prompt.answer(line, trigger))];
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let mut out = vec![Output::Line(format!("{}{}", PROMPT, trimmed))];
        match self.shortcut(&tokens) {
            Some(Shortcut::Help) => {
                self.history.push(trimmed);
                out.extend(self.table.help_lines().into_iter().map(Output::Line));
            }
            Some(Shortcut::ClearHistory) => {
                self.history.clear();
                out.push(Output::line(HISTORY_CLEARED));
            }
            Some(Shortcut::Link(action)) => {
                self.history.push(trimmed);
                out.push(Output::Line(self.prompt.request(action)));
            }
            None => self.run(trimmed, &tokens, &mut out),
        }
        out
    }

    fn shortcut(&self, tokens: &[&str]) -> Option<Shortcut> {
        match tokens {
            ["help" | "?", ..] => return Some(Shortcut::Help),
            ["history", "clear"] => return Some(Shortcut::ClearHistory),
            _ => {}
        }
        let phrase = tokens.join(" ");
        self.links
            .iter()
            .find(|(key, _)| key.split_whitespace().eq(phrase.split(' ')))
            .map(|(_, action)| Shortcut::Link(action.clone()))
    }

    /// Table lookup. Only lines that resolve are recorded in history.
    fn run(&mut self, line: &str, tokens: &[&str], out: &mut Vec<Output>) {
        match self.table.resolve(tokens) {
            Err(err) => {
                log::debug!("rejected {:?}: {}", line, err);
                out.push(Output::Line(err.to_string()));
            }
            Ok(resolution) => {
                self.history.push(line);
                match resolution {
                    Resolution::Text(text) => out.push(Output::Line(text)),
                    Resolution::Builtin(kind) => self.run_builtin(kind, &tokens[1..], out),
                }
            }
        }
    }

    fn run_builtin(&mut self, kind: BuiltinKind, args: &[&str], out: &mut Vec<Output>) {
        match kind {
            BuiltinKind::Clear => {
                out.push(Output::Clear);
                out.push(Output::line(CLEARED));
            }
            BuiltinKind::List => {
                let long = args.contains(&"-l");
                out.extend(self.fs.list(long).into_iter().map(Output::Line));
            }
            BuiltinKind::History => {
                out.extend(self.history.render().into_iter().map(Output::Line));
            }
            BuiltinKind::Cd => {
                let target = args.first().copied().unwrap_or("/");
                if let Err(err) = self.fs.cd(target) {
                    out.push(Output::Line(err.to_string()));
                }
            }
        }
    }

    /// Tab key. Disabled while a confirmation is pending.
    pub fn complete(&self, partial: &str) -> CompletionOutcome {
        if self.prompt.is_awaiting() {
            return CompletionOutcome::Unchanged;
        }
        complete(&self.table, partial)
    }

    pub fn history_previous(&mut self) -> String {
        self.history.previous()
    }

    pub fn history_next(&mut self) -> String {
        self.history.next()
    }

    /// Ctrl+L.
    pub fn interrupt_clear(&self) -> Vec<Output> {
        vec![Output::line("^L"), Output::Clear, Output::line(CLEARED)]
    }
}
