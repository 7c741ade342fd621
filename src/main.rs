//! warpcmd - command routing for multi-word, quoted chat commands
//!
//! Usage:
//!   warpcmd tokenize '/warp set "My Warp"'   Show how a line splits into tokens
//!   warpcmd resolve 'warp set home public'   Show which command a line routes to
//!   warpcmd dispatch warp set home            Dispatch as the console
//!   warpcmd repl                              Dispatch lines read from stdin
//!   warpcmd --help                            Show all commands

use anyhow::Result;
use clap::Parser;

use warpcmd::cli::output::OutputMode;
use warpcmd::cli::{Cli, Commands};
use warpcmd::init::AppContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warpcmd=info".parse()?),
        )
        .init();

    let mode = OutputMode::from_json_flag(cli.json);

    match &cli.command {
        Commands::Completions { shell } => warpcmd::cli::print_completions(*shell),
        cmd => {
            let ctx = AppContext::new(cli.data_dir.clone(), cli.manifest.clone())?;
            warpcmd::cli::execute(cmd, &ctx, mode)?;
        }
    }

    Ok(())
}
