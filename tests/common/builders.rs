//! Test data builders for senders and command specs.
//!
//! Provides fluent API for creating test fixtures with sensible defaults.

#![allow(dead_code)]

use warpcmd::models::{ArgRange, CommandSpec};

use super::harness::RecordingSender;

/// Build a spec with a single key and range.
pub fn spec(name: &str, key: &str, args: ArgRange) -> CommandSpec {
    CommandSpec::builder(name)
        .key(key)
        .args(args)
        .build()
        .expect("valid test spec")
}

/// Builder for creating test senders.
pub struct SenderBuilder {
    name: String,
    permissions: Vec<String>,
    operator: bool,
    console: bool,
}

impl SenderBuilder {
    /// A player with no permissions.
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: Vec::new(),
            operator: false,
            console: false,
        }
    }

    /// The server console.
    pub fn console() -> Self {
        Self {
            console: true,
            ..Self::player("CONSOLE")
        }
    }

    /// Grant a permission node.
    pub fn permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.push(node.into());
        self
    }

    pub fn operator(mut self) -> Self {
        self.operator = true;
        self
    }

    pub fn build(self) -> RecordingSender {
        RecordingSender::new(self.name, self.permissions, self.operator, self.console)
    }
}
