//! Dispatch command handlers: one-shot dispatch and the stdin REPL.

use anyhow::Result;
use serde::Serialize;
use std::cell::RefCell;
use std::io::{BufRead, IsTerminal, Write};

use colored::Colorize;

use crate::cli::output::{
    output_json, print_error, print_hint, print_success, print_warning, OutputMode,
};
use crate::cli::SenderArgs;
use crate::init::AppContext;
use crate::sender::{CommandSender, ConsoleSender};
use crate::services::DispatchOutcome;

/// Sender backed by the terminal.
///
/// Messages are printed as they arrive in human mode and collected for
/// the JSON report otherwise.
pub struct TerminalSender {
    inner: ConsoleSender,
    mode: OutputMode,
    transcript: RefCell<Vec<String>>,
}

impl TerminalSender {
    pub fn new(inner: ConsoleSender, mode: OutputMode) -> Self {
        Self {
            inner,
            mode,
            transcript: RefCell::new(Vec::new()),
        }
    }

    pub fn from_args(args: &SenderArgs, mode: OutputMode) -> Self {
        let inner = if args.console {
            let mut console = ConsoleSender::console();
            if let Some(name) = &args.name {
                console.name = name.clone();
            }
            console
        } else {
            let name = args.name.clone().unwrap_or_else(|| "cli".to_string());
            ConsoleSender::player(name, args.permissions.iter().cloned())
                .with_operator(args.operator)
        };
        Self::new(inner, mode)
    }

    /// Drain the messages received since the last call.
    pub fn take_transcript(&self) -> Vec<String> {
        self.transcript.take()
    }
}

impl CommandSender for TerminalSender {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn has_permission(&self, node: &str) -> bool {
        self.inner.has_permission(node)
    }

    fn is_operator(&self) -> bool {
        self.inner.is_operator()
    }

    fn is_console(&self) -> bool {
        self.inner.is_console()
    }

    fn send_message(&self, message: &str) {
        if self.mode == OutputMode::Human {
            println!("{} {}", "»".cyan(), message);
        }
        self.transcript.borrow_mut().push(message.to_string());
    }
}

#[derive(Serialize)]
struct DispatchReport<'a> {
    sender: &'a str,
    line: &'a str,
    #[serde(flatten)]
    outcome: &'a DispatchOutcome,
    messages: Vec<String>,
}

fn report(sender: &TerminalSender, line: &str, outcome: &DispatchOutcome, mode: OutputMode) {
    let messages = sender.take_transcript();

    if mode == OutputMode::Json {
        output_json(&DispatchReport {
            sender: sender.name(),
            line,
            outcome,
            messages,
        });
        return;
    }

    match outcome {
        DispatchOutcome::NoMatch => print_hint(&format!("No command matches '{}'.", line)),
        DispatchOutcome::Help { command } => print_hint(&format!("Shown help for {}.", command)),
        DispatchOutcome::PermissionDenied { command, .. } => {
            print_warning(&format!("{} denied for {}", command, sender.name()))
        }
        DispatchOutcome::ArityMismatch {
            command,
            given,
            expected,
        } => print_warning(&format!(
            "{} takes {} argument(s), got {}",
            command, expected, given
        )),
        DispatchOutcome::Ran { command, .. } => print_success(command),
        DispatchOutcome::Failed { command, message } => {
            print_error(&format!("{} failed: {}", command, message))
        }
    }
}

pub fn handle_dispatch(
    ctx: &AppContext,
    label: &str,
    args: &[String],
    sender_args: &SenderArgs,
    mode: OutputMode,
) -> Result<()> {
    let sender = TerminalSender::from_args(sender_args, mode);
    let outcome = ctx.dispatcher.execute(&sender, label, args);

    let mut line = label.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    report(&sender, &line, &outcome, mode);
    Ok(())
}

pub fn handle_repl(ctx: &AppContext, sender_args: &SenderArgs, mode: OutputMode) -> Result<()> {
    let sender = TerminalSender::from_args(sender_args, mode);
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal() && mode == OutputMode::Human;

    if interactive {
        print_hint(&format!(
            "Dispatching as {}. Type 'exit' to quit.",
            sender.name()
        ));
    }

    let mut input = stdin.lock();
    let mut buffer = String::new();
    loop {
        if interactive {
            print!("{} ", ">".bold());
            std::io::stdout().flush()?;
        }

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let outcome = ctx.dispatcher.dispatch_line(&sender, line);
        report(&sender, line, &outcome, mode);
    }

    Ok(())
}
