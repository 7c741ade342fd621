//! Command registration metadata: name, keys, usage text and permissions.

use serde::Serialize;

use crate::models::key::{ArgRange, CommandKey};
use crate::WarpCmdError;

/// Who may run a command.
///
/// Holding any one of `nodes` is enough. With `operator_override`, a
/// server operator passes regardless of the nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionPolicy {
    pub nodes: Vec<String>,
    pub operator_override: bool,
}

impl PermissionPolicy {
    pub fn new(nodes: Vec<String>, operator_override: bool) -> Self {
        Self {
            nodes,
            operator_override,
        }
    }

    /// No nodes and no operator flag: only the console passes.
    pub fn is_console_only(&self) -> bool {
        self.nodes.is_empty() && !self.operator_override
    }
}

/// Static description of a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub examples: Vec<String>,
    pub keys: Vec<CommandKey>,
    pub permissions: PermissionPolicy,
}

impl CommandSpec {
    pub fn builder(name: impl Into<String>) -> CommandSpecBuilder {
        CommandSpecBuilder::new(name)
    }

    /// Key strings in registration order, for alias listings.
    pub fn key_strings(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.to_string()).collect()
    }
}

/// Fluent constructor for [`CommandSpec`].
///
/// Keys added without their own range take the command-wide range that is
/// in effect when [`build`](Self::build) runs.
#[derive(Debug, Clone)]
pub struct CommandSpecBuilder {
    name: String,
    description: String,
    usage: String,
    examples: Vec<String>,
    args: ArgRange,
    keys: Vec<(String, Option<ArgRange>)>,
    nodes: Vec<String>,
    operator_override: bool,
}

impl CommandSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            usage: String::new(),
            examples: Vec::new(),
            args: ArgRange::default(),
            keys: Vec::new(),
            nodes: Vec::new(),
            operator_override: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Command-wide argument range.
    pub fn args(mut self, args: ArgRange) -> Self {
        self.args = args;
        self
    }

    /// Add a key using the command-wide range.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push((key.into(), None));
        self
    }

    /// Add a key with its own range.
    pub fn key_with_args(mut self, key: impl Into<String>, args: ArgRange) -> Self {
        self.keys.push((key.into(), Some(args)));
        self
    }

    pub fn permission(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn operator_override(mut self, allowed: bool) -> Self {
        self.operator_override = allowed;
        self
    }

    pub fn build(self) -> Result<CommandSpec, WarpCmdError> {
        let args = self.args.validate()?;
        if self.keys.is_empty() {
            return Err(WarpCmdError::InvalidCommand {
                name: self.name,
                message: "at least one key is required".to_string(),
            });
        }

        let keys = self
            .keys
            .iter()
            .map(|(key, range)| CommandKey::parse(key, range.unwrap_or(args)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CommandSpec {
            name: self.name,
            description: self.description,
            usage: self.usage,
            examples: self.examples,
            keys,
            permissions: PermissionPolicy::new(self.nodes, self.operator_override),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_inherit_command_range() {
        let spec = CommandSpec::builder("Warp set")
            .key("warp set")
            .key_with_args("setwarp", ArgRange::exactly(1))
            .args(ArgRange::new(1, 2).unwrap())
            .build()
            .unwrap();

        assert_eq!(spec.keys[0].args(), ArgRange::new(1, 2).unwrap());
        assert_eq!(spec.keys[1].args(), ArgRange::exactly(1));
        assert_eq!(spec.key_strings(), vec!["warp set", "setwarp"]);
    }

    #[test]
    fn test_build_requires_a_key() {
        let err = CommandSpec::builder("Nothing").build().unwrap_err();
        assert!(matches!(err, WarpCmdError::InvalidCommand { .. }));
    }

    #[test]
    fn test_build_propagates_bad_key() {
        let err = CommandSpec::builder("Blank").key("  ").build().unwrap_err();
        assert!(matches!(err, WarpCmdError::InvalidKey(_)));
    }

    #[test]
    fn test_policy_console_only() {
        assert!(PermissionPolicy::default().is_console_only());
        assert!(!PermissionPolicy::new(vec![], true).is_console_only());
        assert!(!PermissionPolicy::new(vec!["a.b".into()], false).is_console_only());
    }
}
