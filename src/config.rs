use crate::error::{Result, TerminalError};
use crate::vfs::FsNode;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_WELCOME: &str = "Welcome to the Cyberhack Terminal v1.0!";
pub const NO_OUTPUT: &str = "No output.";

/// One command (or subcommand) as defined in `commands.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CommandEntry {
    /// Filled from the mapping key after parsing.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub output: Option<String>,
    pub hidden: bool,
    pub subcommands: BTreeMap<String, CommandEntry>,
}

impl CommandEntry {
    pub fn new(name: &str, description: &str, output: Option<&str>) -> Self {
        CommandEntry {
            name: name.into(),
            description: description.into(),
            output: output.map(Into::into),
            hidden: false,
            subcommands: BTreeMap::new(),
        }
    }

    pub fn with_subcommand(mut self, sub: CommandEntry) -> Self {
        self.subcommands.insert(sub.name.clone(), sub);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn has_subcommands(&self) -> bool {
        !self.subcommands.is_empty()
    }

    /// Stored output, or the placeholder when the entry defines none.
    pub fn output_text(&self) -> &str {
        self.output.as_deref().unwrap_or(NO_OUTPUT)
    }

    fn fill_names(entries: &mut BTreeMap<String, CommandEntry>) {
        for (key, entry) in entries.iter_mut() {
            entry.name = key.clone();
            Self::fill_names(&mut entry.subcommands);
        }
    }
}

/// An external link that is only opened after a yes/no confirmation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LinkAction {
    pub label: String,
    pub url: String,
}

fn default_welcome() -> String {
    DEFAULT_WELCOME.to_string()
}

fn default_links() -> BTreeMap<String, LinkAction> {
    let community = LinkAction {
        label: "the Cyberhack community".into(),
        url: "https://discord.gg/cyberhack".into(),
    };
    let discord = LinkAction {
        label: "Discord".into(),
        url: community.url.clone(),
    };
    BTreeMap::from([
        ("join community".to_string(), community),
        ("open discord".to_string(), discord),
    ])
}

/// Root of `commands.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    #[serde(default)]
    pub commands: BTreeMap<String, CommandEntry>,
    #[serde(default)]
    pub ascii_art: String,
    #[serde(default = "default_welcome")]
    pub welcome_message: String,
    #[serde(default)]
    pub filesystem: BTreeMap<String, FsNode>,
    #[serde(default = "default_links")]
    pub links: BTreeMap<String, LinkAction>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            commands: BTreeMap::new(),
            ascii_art: String::new(),
            welcome_message: default_welcome(),
            filesystem: BTreeMap::new(),
            links: default_links(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: TerminalConfig = serde_json::from_str(json)?;
        if config
            .links
            .keys()
            .any(|phrase| phrase.split_whitespace().next().is_none())
        {
            return Err(TerminalError::Config("empty link phrase".into()));
        }
        CommandEntry::fill_names(&mut config.commands);
        Ok(config)
    }
}
