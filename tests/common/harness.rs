//! Dispatch harness: a registry whose handlers record every invocation.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use warpcmd::config::DispatchConfig;
use warpcmd::models::{CommandManifest, CommandSpec};
use warpcmd::registry::CommandRegistry;
use warpcmd::sender::CommandSender;
use warpcmd::services::{DispatchOutcome, Dispatcher};

/// Sender that keeps every message it receives.
pub struct RecordingSender {
    name: String,
    permissions: Vec<String>,
    operator: bool,
    console: bool,
    messages: RefCell<Vec<String>>,
}

impl RecordingSender {
    pub fn new(name: String, permissions: Vec<String>, operator: bool, console: bool) -> Self {
        Self {
            name,
            permissions,
            operator,
            console,
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl CommandSender for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|p| p == node)
    }

    fn is_operator(&self) -> bool {
        self.operator
    }

    fn is_console(&self) -> bool {
        self.console
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// (command name, args) for each handler call, in order.
pub type CallLog = Arc<Mutex<Vec<(String, Vec<String>)>>>;

/// Dispatcher whose handlers only log their invocations.
pub struct DispatchHarness {
    pub dispatcher: Dispatcher,
    log: CallLog,
}

impl DispatchHarness {
    pub fn new(specs: Vec<CommandSpec>) -> Self {
        Self::with_config(specs, DispatchConfig::default())
    }

    pub fn with_config(specs: Vec<CommandSpec>, config: DispatchConfig) -> Self {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        for spec in specs {
            let log = log.clone();
            let name = spec.name.clone();
            registry.register(
                spec,
                move |_: &dyn CommandSender, args: &[String]| -> anyhow::Result<()> {
                    log.lock().unwrap().push((name.clone(), args.to_vec()));
                    Ok(())
                },
            );
        }
        Self {
            dispatcher: Dispatcher::new(registry, config),
            log,
        }
    }

    /// Harness over the built-in OpenWarp manifest.
    pub fn openwarp() -> Self {
        let specs = CommandManifest::embedded()
            .and_then(|m| m.specs())
            .expect("embedded manifest is valid");
        Self::new(specs)
    }

    pub fn run(&self, sender: &RecordingSender, label: &str, args: &[&str]) -> DispatchOutcome {
        self.dispatcher.execute(sender, label, args)
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.log.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}
