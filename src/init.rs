//! Shared initialization for the CLI and REPL.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{load_dispatch_config, DispatchConfig};
use crate::models::CommandManifest;
use crate::registry::{CommandHandler, CommandRegistry};
use crate::sender::CommandSender;
use crate::services::Dispatcher;
use crate::shell::join;
use crate::WarpCmdError;

pub const MANIFEST_FILE: &str = "commands.yaml";

/// Handler bound to manifest commands: reports the routed call back.
#[derive(Debug, Clone)]
pub struct EchoHandler {
    name: String,
}

impl EchoHandler {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CommandHandler for EchoHandler {
    fn run(&self, sender: &dyn CommandSender, args: &[String]) -> anyhow::Result<()> {
        if args.is_empty() {
            sender.send_message(&format!("{} (no arguments)", self.name));
        } else {
            sender.send_message(&format!("{}: {}", self.name, join(args)));
        }
        Ok(())
    }
}

/// Where the loaded manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::File(path) => write!(f, "{}", path.display()),
            ManifestSource::Embedded => write!(f, "embedded"),
        }
    }
}

/// Register every manifest command with an [`EchoHandler`], in manifest order.
pub fn build_dispatcher(
    manifest: &CommandManifest,
    config: DispatchConfig,
) -> Result<Dispatcher, WarpCmdError> {
    let mut registry = CommandRegistry::new();
    for spec in manifest.specs()? {
        let handler = EchoHandler::new(spec.name.clone());
        registry.register(spec, handler);
    }
    Ok(Dispatcher::new(registry, config))
}

/// Manifest priority: explicit path > `{data_path}/commands.yaml` > embedded.
///
/// An explicit path must load. A broken data-dir manifest falls back to the
/// embedded one with a warning.
pub fn load_manifest(
    data_path: &Path,
    explicit: Option<&Path>,
) -> Result<(CommandManifest, ManifestSource), WarpCmdError> {
    if let Some(path) = explicit {
        let manifest = CommandManifest::load(path)?;
        return Ok((manifest, ManifestSource::File(path.to_path_buf())));
    }

    let local = data_path.join(MANIFEST_FILE);
    if local.exists() {
        match CommandManifest::load(&local) {
            Ok(manifest) => return Ok((manifest, ManifestSource::File(local))),
            Err(e) => {
                tracing::warn!("Failed to load {}: {}. Using embedded.", local.display(), e);
            }
        }
    }

    Ok((CommandManifest::embedded()?, ManifestSource::Embedded))
}

/// Data path priority: explicit path > WARPCMD_HOME env > ./.warpcmd (if exists) > ~/.warpcmd
pub fn resolve_data_path(explicit_path: Option<PathBuf>) -> PathBuf {
    explicit_path
        .or_else(|| std::env::var("WARPCMD_HOME").ok().map(PathBuf::from))
        .or_else(|| {
            let local_path = Path::new(".warpcmd");
            if local_path.exists() && local_path.is_dir() {
                Some(local_path.to_path_buf())
            } else {
                None
            }
        })
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".warpcmd"))
                .unwrap_or_else(|| PathBuf::from(".warpcmd"))
        })
}

/// Application context: data path, config and the ready dispatcher.
#[derive(Debug)]
pub struct AppContext {
    pub data_path: PathBuf,
    pub manifest_source: ManifestSource,
    pub dispatcher: Dispatcher,
}

impl AppContext {
    pub fn new(explicit_path: Option<PathBuf>, manifest_path: Option<PathBuf>) -> Result<Self> {
        let data_path = resolve_data_path(explicit_path);
        tracing::info!("Using data path: {}", data_path.display());

        let config = load_dispatch_config(&data_path);
        let (manifest, manifest_source) = load_manifest(&data_path, manifest_path.as_deref())?;
        let dispatcher = build_dispatcher(&manifest, config)?;

        tracing::info!(
            "Registered {} commands from {}",
            dispatcher.registry().len(),
            manifest_source
        );

        Ok(Self {
            data_path,
            manifest_source,
            dispatcher,
        })
    }

    pub fn config(&self) -> &DispatchConfig {
        self.dispatcher.config()
    }
}
