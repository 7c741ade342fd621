//! YAML command manifest: declarative command registrations.
//!
//! ```yaml
//! commands:
//!   - name: Warp set
//!     usage: /warp set {NAME} [public|private]
//!     args: { min: 1, max: 2 }
//!     permissions: [openwarp.warp.set]
//!     operator_override: true
//!     keys:
//!       - warp set
//!       - { key: setwarp, args: { min: 1, max: 2 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::command::CommandSpec;
use crate::models::key::ArgRange;
use crate::WarpCmdError;

/// Built-in manifest describing the OpenWarp command surface.
pub const DEFAULT_MANIFEST: &str = include_str!("openwarp_commands.yaml");

/// A key entry: either a bare string or a key with its own range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyEntry {
    Plain(String),
    Ranged { key: String, args: ArgRange },
}

/// One command as written in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub args: ArgRange,
    pub keys: Vec<KeyEntry>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub operator_override: bool,
}

impl CommandEntry {
    pub fn to_spec(&self) -> Result<CommandSpec, WarpCmdError> {
        let mut builder = CommandSpec::builder(&self.name)
            .description(&self.description)
            .usage(&self.usage)
            .args(self.args)
            .operator_override(self.operator_override);

        for example in &self.examples {
            builder = builder.example(example);
        }
        for node in &self.permissions {
            builder = builder.permission(node);
        }
        for entry in &self.keys {
            builder = match entry {
                KeyEntry::Plain(key) => builder.key(key),
                KeyEntry::Ranged { key, args } => builder.key_with_args(key, *args),
            };
        }

        builder.build()
    }
}

/// Top-level manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandManifest {
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

impl CommandManifest {
    pub fn from_yaml(yaml: &str) -> Result<Self, WarpCmdError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, WarpCmdError> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content).map_err(|e| WarpCmdError::Manifest {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The built-in OpenWarp manifest.
    pub fn embedded() -> Result<Self, WarpCmdError> {
        serde_yaml_ng::from_str(DEFAULT_MANIFEST).map_err(|e| WarpCmdError::Manifest {
            source_name: "embedded".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert every entry, in manifest order.
    pub fn specs(&self) -> Result<Vec<CommandSpec>, WarpCmdError> {
        self.commands.iter().map(CommandEntry::to_spec).collect()
    }
}
