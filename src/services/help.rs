//! Usage text for a command.

use crate::models::CommandSpec;
use crate::sender::CommandSender;

/// Render the help block for `spec`, one message per line.
pub fn help_lines(spec: &CommandSpec) -> Vec<String> {
    let mut lines = vec![format!("--- {} ---", spec.name)];
    if !spec.description.is_empty() {
        lines.push(spec.description.clone());
    }
    if !spec.usage.is_empty() {
        lines.push(spec.usage.clone());
    }
    if !spec.permissions.nodes.is_empty() {
        lines.push(format!("Permission: {}", spec.permissions.nodes.join(", ")));
    }
    lines.push(format!("Aliases: {}", spec.key_strings().join(", ")));
    if !spec.examples.is_empty() {
        lines.push("Examples:".to_string());
        lines.extend(spec.examples.iter().cloned());
    }
    lines
}

pub fn send_help(spec: &CommandSpec, sender: &dyn CommandSender) {
    for line in help_lines(spec) {
        sender.send_message(&line);
    }
}
