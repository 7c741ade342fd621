//! CLI interface for warpcmd.

pub mod handlers;
pub mod output;

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use output::OutputMode;

/// warpcmd - tokenize, resolve and dispatch multi-word chat commands
#[derive(Parser)]
#[command(name = "warpcmd", version, about, long_about = None)]
pub struct Cli {
    /// Override data directory (default: ~/.warpcmd)
    #[arg(long, env = "WARPCMD_HOME", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command manifest to load instead of {data_dir}/commands.yaml
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Who a dispatched command runs as.
#[derive(Args, Debug, Clone, Default)]
pub struct SenderArgs {
    /// Sender name
    #[arg(long = "as", value_name = "NAME")]
    pub name: Option<String>,
    /// Grant a permission node (repeatable)
    #[arg(long = "permission", short = 'p', value_name = "NODE")]
    pub permissions: Vec<String>,
    /// Sender is a server operator
    #[arg(long)]
    pub operator: bool,
    /// Run as the server console (bypasses permission checks)
    #[arg(long)]
    pub console: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a command line into tokens
    Tokenize {
        /// The raw line, e.g. 'warp set "My Warp"'
        line: String,
    },

    /// Quote tokens so they tokenize back unchanged
    Quote {
        /// Tokens to join
        tokens: Vec<String>,
    },

    /// Show which command a line resolves to
    Resolve {
        /// The raw line, e.g. 'warp set home public'
        line: String,
        /// List every candidate key, not just the winner
        #[arg(long)]
        all: bool,
    },

    /// Dispatch one command
    Dispatch {
        /// Command label (first word)
        label: String,
        /// Remaining arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
        #[command(flatten)]
        sender: SenderArgs,
    },

    /// Read lines from stdin and dispatch each one
    Repl {
        #[command(flatten)]
        sender: SenderArgs,
    },

    /// List registered commands
    #[command(alias = "list")]
    Commands,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, elvish, powershell)
        shell: clap_complete::Shell,
    },
}

pub fn print_completions(shell: clap_complete::Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "warpcmd", &mut std::io::stdout());
}

/// Execute a CLI command.
pub fn execute(
    command: &Commands,
    ctx: &crate::init::AppContext,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match command {
        Commands::Tokenize { line } => handlers::shell::handle_tokenize(line, mode)?,
        Commands::Quote { tokens } => handlers::shell::handle_quote(tokens, mode)?,
        Commands::Resolve { line, all } => handlers::resolve::handle_resolve(ctx, line, *all, mode)?,
        Commands::Dispatch {
            label,
            args,
            sender,
        } => handlers::dispatch::handle_dispatch(ctx, label, args, sender, mode)?,
        Commands::Repl { sender } => handlers::dispatch::handle_repl(ctx, sender, mode)?,
        Commands::Commands => handlers::commands::handle_commands(ctx, mode)?,
        Commands::Completions { shell } => print_completions(*shell),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dispatch_flags() {
        let cli = Cli::parse_from([
            "warpcmd",
            "dispatch",
            "--operator",
            "-p",
            "openwarp.warp.set",
            "warp",
            "set",
            "home",
        ]);
        match cli.command {
            Commands::Dispatch {
                label,
                args,
                sender,
            } => {
                assert_eq!(label, "warp");
                assert_eq!(args, vec!["set", "home"]);
                assert!(sender.operator);
                assert_eq!(sender.permissions, vec!["openwarp.warp.set"]);
            }
            _ => panic!("expected dispatch"),
        }
    }
}
