use crate::error::{Result, TerminalError};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";

/// A node of the filesystem snapshot shipped in `commands.json`, keyed by
/// its `"type"` field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File {
        permissions: String,
        size: serde_json::Value,
    },
    Directory {
        #[serde(default)]
        contents: BTreeMap<String, FsNode>,
    },
}

impl FsNode {
    pub fn file(permissions: &str, size: u64) -> Self {
        FsNode::File {
            permissions: permissions.into(),
            size: size.into(),
        }
    }

    pub fn dir(contents: impl IntoIterator<Item = (&'static str, FsNode)>) -> Self {
        FsNode::Directory {
            contents: contents
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    fn long_line(&self, name: &str) -> String {
        match self {
            FsNode::File { permissions, size } => {
                let size = match size {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{} {} {}", permissions, size, name)
            }
            FsNode::Directory { .. } => format!("{} {}", DIR_PERMISSIONS, name),
        }
    }
}

/// Read-only view over the snapshot with a movable working directory.
pub struct Vfs {
    root: BTreeMap<String, FsNode>,
    cwd: Vec<String>,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl Vfs {
    pub fn new(root: BTreeMap<String, FsNode>) -> Self {
        Vfs {
            root,
            cwd: Vec::new(),
        }
    }

    pub fn cwd(&self) -> String {
        format!("/{}", self.cwd.join("/"))
    }

    fn normalize(&self, path: &str) -> Vec<String> {
        let mut parts = if path.starts_with('/') {
            Vec::new()
        } else {
            self.cwd.clone()
        };
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part.to_string()),
            }
        }
        parts
    }

    fn resolve_dir(&self, parts: &[String]) -> Option<&BTreeMap<String, FsNode>> {
        let mut dir = &self.root;
        for part in parts {
            match dir.get(part)? {
                FsNode::Directory { contents } => dir = contents,
                FsNode::File { .. } => return None,
            }
        }
        Some(dir)
    }

    /// `ls` of the working directory, sorted by name.
    pub fn list(&self, long: bool) -> Vec<String> {
        let Some(dir) = self.resolve_dir(&self.cwd) else {
            return Vec::new();
        };
        if long {
            dir.iter().map(|(name, node)| node.long_line(name)).collect()
        } else if dir.is_empty() {
            Vec::new()
        } else {
            vec![dir.keys().map(String::as_str).collect::<Vec<_>>().join(" ")]
        }
    }

    pub fn cd(&mut self, path: &str) -> Result<()> {
        let target = self.normalize(path);
        if self.resolve_dir(&target).is_none() {
            return Err(TerminalError::NoSuchDirectory(path.to_string()));
        }
        self.cwd = target;
        Ok(())
    }
}
