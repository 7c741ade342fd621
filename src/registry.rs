//! Append-only registry of commands, populated at startup.

use crate::models::CommandSpec;
use crate::sender::CommandSender;
use crate::services::help::send_help;

/// Code invoked once a command has been resolved and authorized.
pub trait CommandHandler: Send + Sync {
    /// Run the command with the arguments left after the key words.
    fn run(&self, sender: &dyn CommandSender, args: &[String]) -> anyhow::Result<()>;

    /// Show usage text. Defaults to the standard help layout.
    fn help(&self, spec: &CommandSpec, sender: &dyn CommandSender) {
        send_help(spec, sender);
    }
}

impl<F> CommandHandler for F
where
    F: Fn(&dyn CommandSender, &[String]) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, sender: &dyn CommandSender, args: &[String]) -> anyhow::Result<()> {
        self(sender, args)
    }
}

/// A command spec paired with its handler.
pub struct CommandRegistration {
    pub spec: CommandSpec,
    pub handler: Box<dyn CommandHandler>,
}

impl CommandRegistration {
    pub fn new(spec: CommandSpec, handler: impl CommandHandler + 'static) -> Self {
        Self {
            spec,
            handler: Box::new(handler),
        }
    }
}

impl std::fmt::Debug for CommandRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistration")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Every registered command, in registration order.
///
/// Commands may share or overlap keys; resolution picks one per dispatch.
/// There is no removal.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandRegistration>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: CommandSpec, handler: impl CommandHandler + 'static) {
        self.push(CommandRegistration::new(spec, handler));
    }

    pub fn push(&mut self, registration: CommandRegistration) {
        tracing::debug!(
            name = %registration.spec.name,
            keys = ?registration.spec.key_strings(),
            "registered command"
        );
        self.commands.push(registration);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registrations in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &CommandRegistration> {
        self.commands.iter()
    }

    /// First registration with the given name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&CommandRegistration> {
        self.commands
            .iter()
            .find(|c| c.spec.name.eq_ignore_ascii_case(name))
    }
}
