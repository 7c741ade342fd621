//! Tokenize, resolve, authorize and invoke a command.

use serde::Serialize;

use crate::config::DispatchConfig;
use crate::registry::CommandRegistry;
use crate::sender::CommandSender;
use crate::services::permission::{denial_lines, is_permitted};
use crate::services::resolver::resolve;
use crate::shell::safe_tokenize;

/// What a dispatch call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// No registered key prefixed the input.
    NoMatch,
    /// Usage text was shown because the only argument was the help token.
    Help { command: String },
    /// The sender failed the permission check.
    PermissionDenied {
        command: String,
        required: Vec<String>,
    },
    /// Usage text was shown because the argument count was out of range.
    ArityMismatch {
        command: String,
        given: usize,
        expected: String,
    },
    /// The handler ran to completion.
    Ran { command: String, args: Vec<String> },
    /// The handler ran and returned an error.
    Failed { command: String, message: String },
}

impl DispatchOutcome {
    /// Whether some command was resolved for the input.
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchOutcome::NoMatch)
    }
}

/// Routes raw command input to registered handlers.
///
/// Owns the registry; it is read-only once the dispatcher exists.
#[derive(Debug)]
pub struct Dispatcher {
    registry: CommandRegistry,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, config: DispatchConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Host entry point. Returns whether a command was resolved.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> bool {
        self.execute(sender, label, args).is_handled()
    }

    /// Dispatch a whole line such as `/warp set home`.
    pub fn dispatch_line(&self, sender: &dyn CommandSender, line: &str) -> DispatchOutcome {
        let line = line.trim_start();
        let line = line.strip_prefix('/').unwrap_or(line);
        match line.split_once(char::is_whitespace) {
            Some((label, rest)) => self.execute(sender, label, &[rest]),
            None => self.execute::<&str>(sender, line, &[]),
        }
    }

    /// Run the full pipeline and report what happened.
    pub fn execute<S: AsRef<str>>(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> DispatchOutcome {
        let mut words = vec![label.to_lowercase()];
        words.extend(args.iter().map(|a| a.as_ref().to_string()));
        let line = words.join(" ");

        tracing::debug!(sender = sender.name(), line = %line, "command received");

        let tokens = safe_tokenize(&line);
        let Some(resolution) = resolve(&tokens, &self.registry) else {
            tracing::debug!(line = %line, "no command matched");
            return DispatchOutcome::NoMatch;
        };

        let spec = &resolution.command.spec;
        let handler = &resolution.command.handler;
        let permitted = is_permitted(sender, &spec.permissions);

        tracing::debug!(
            command = %spec.name,
            key = %resolution.key,
            args = ?resolution.args,
            "resolved command"
        );

        if permitted && resolution.args.len() == 1 && resolution.args[0] == self.config.help_token
        {
            handler.help(spec, sender);
            return DispatchOutcome::Help {
                command: spec.name.clone(),
            };
        }

        if !permitted {
            tracing::debug!(command = %spec.name, sender = sender.name(), "permission denied");
            if self.config.notify_sender {
                for line in denial_lines(&spec.permissions) {
                    sender.send_message(&line);
                }
            }
            return DispatchOutcome::PermissionDenied {
                command: spec.name.clone(),
                required: spec.permissions.nodes.clone(),
            };
        }

        if !resolution.arity_ok() {
            handler.help(spec, sender);
            return DispatchOutcome::ArityMismatch {
                command: spec.name.clone(),
                given: resolution.args.len(),
                expected: resolution.key.args().to_string(),
            };
        }

        match handler.run(sender, &resolution.args) {
            Ok(()) => DispatchOutcome::Ran {
                command: spec.name.clone(),
                args: resolution.args,
            },
            Err(e) => {
                tracing::warn!(command = %spec.name, error = %e, "command handler failed");
                sender.send_message(&format!("Error: {}", e));
                DispatchOutcome::Failed {
                    command: spec.name.clone(),
                    message: e.to_string(),
                }
            }
        }
    }
}
