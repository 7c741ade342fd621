//! Resolution preview: which command and key a line would route to.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{
    output_json, print_error, print_header, print_hint, print_kv, print_table,
    OutputMode,
};
use crate::init::AppContext;
use crate::services::{candidates, resolve, select};
use crate::cli::handlers::shell::tokenize_line;
use crate::shell::join;

#[derive(Serialize)]
struct CandidateRow {
    command: String,
    key: String,
    specificity: usize,
    remaining: usize,
    expected: String,
    arity_ok: bool,
    selected: bool,
}

pub fn handle_resolve(ctx: &AppContext, line: &str, all: bool, mode: OutputMode) -> Result<()> {
    let tokens = match tokenize_line(line) {
        Ok(tokens) => tokens,
        Err(e) => {
            // Dispatch treats a malformed line as no match.
            print_error(&format!("{} (dispatch would ignore this line)", e));
            return Ok(());
        }
    };
    let registry = ctx.dispatcher.registry();

    if all {
        let found = candidates(&tokens, registry);
        let winner = select(&found);
        let rows: Vec<CandidateRow> = found
            .iter()
            .map(|c| CandidateRow {
                command: c.command.spec.name.clone(),
                key: c.key.to_string(),
                specificity: c.specificity(),
                remaining: c.remaining,
                expected: c.key.args().to_string(),
                arity_ok: c.arity_ok(),
                selected: winner.is_some_and(|w| std::ptr::eq(w.key, c.key)),
            })
            .collect();

        if mode == OutputMode::Json {
            output_json(&rows);
            return Ok(());
        }

        let table_rows = rows
            .iter()
            .map(|r| {
                vec![
                    if r.selected { "*".to_string() } else { String::new() },
                    r.command.clone(),
                    r.key.clone(),
                    r.specificity.to_string(),
                    r.remaining.to_string(),
                    r.expected.clone(),
                    if r.arity_ok { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        print_table(
            &["", "Command", "Key", "Words", "Args", "Expected", "Fits"],
            table_rows,
            "No command key prefixes this line.",
        );
        return Ok(());
    }

    let summary = resolve(&tokens, registry).map(|r| r.summary());
    if mode == OutputMode::Json {
        output_json(&summary);
        return Ok(());
    }

    match summary {
        Some(s) => {
            print_header(&s.command);
            print_kv("Key", &s.key);
            print_kv("Args", &join(&s.args));
            print_kv("Expected", &s.expected);
            if s.arity_ok {
                print_kv("Arity", "ok");
            } else {
                print_kv("Arity", "mismatch (usage text would be shown)");
            }
        }
        None => print_hint("No command matches this line."),
    }

    Ok(())
}
