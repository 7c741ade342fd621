//! List registered commands.

use anyhow::Result;

use crate::cli::output::{output_json, print_hint, print_table, OutputMode};
use crate::init::AppContext;
use crate::models::CommandSpec;

pub fn handle_commands(ctx: &AppContext, mode: OutputMode) -> Result<()> {
    let registry = ctx.dispatcher.registry();

    if mode == OutputMode::Json {
        let specs: Vec<&CommandSpec> = registry.iter().map(|c| &c.spec).collect();
        output_json(&specs);
        return Ok(());
    }

    let rows = registry
        .iter()
        .map(|c| {
            let spec = &c.spec;
            let keys = spec
                .keys
                .iter()
                .map(|k| format!("{} ({})", k, k.args()))
                .collect::<Vec<_>>()
                .join(", ");
            let permissions = if spec.permissions.is_console_only() {
                "(console only)".to_string()
            } else {
                let mut nodes = spec.permissions.nodes.join(", ");
                if spec.permissions.operator_override {
                    if !nodes.is_empty() {
                        nodes.push_str(", ");
                    }
                    nodes.push_str("op");
                }
                nodes
            };
            vec![spec.name.clone(), keys, permissions, spec.usage.clone()]
        })
        .collect();

    print_table(
        &["Name", "Keys (args)", "Permission", "Usage"],
        rows,
        "No commands registered.",
    );
    print_hint(&format!("Manifest: {}", ctx.manifest_source));
    Ok(())
}
