//! The party issuing a command.
//!
//! A [`CommandSender`] is both the permission oracle and the notification
//! sink the dispatcher talks to. Hosts implement it for their player and
//! console types.

use std::collections::HashSet;

/// Someone who can issue commands and receive messages.
pub trait CommandSender {
    /// Display name of the sender.
    fn name(&self) -> &str;

    /// Whether the sender holds the given permission node.
    fn has_permission(&self, node: &str) -> bool;

    /// Whether the sender is a server operator.
    fn is_operator(&self) -> bool;

    /// The server console passes every permission check.
    fn is_console(&self) -> bool {
        false
    }

    /// Deliver one line of text to the sender.
    fn send_message(&self, message: &str);
}

/// Sender that prints to stdout and holds a fixed permission set.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSender {
    pub name: String,
    pub permissions: HashSet<String>,
    pub operator: bool,
    pub console: bool,
}

impl ConsoleSender {
    /// The server console itself.
    pub fn console() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            console: true,
            ..Self::default()
        }
    }

    /// A named player with the given permission nodes.
    pub fn player(name: impl Into<String>, permissions: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_operator(mut self, operator: bool) -> Self {
        self.operator = operator;
        self
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }

    fn is_operator(&self) -> bool {
        self.operator
    }

    fn is_console(&self) -> bool {
        self.console
    }

    fn send_message(&self, message: &str) {
        println!("{}", message);
    }
}
