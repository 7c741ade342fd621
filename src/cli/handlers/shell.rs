//! Tokenizer command handlers: tokenize and quote.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output_json, print_error, print_table, OutputMode};
use crate::shell::{join, quote, tokenize};
use crate::WarpCmdError;

/// Tokenize a line typed on the command line.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, WarpCmdError> {
    Ok(tokenize(line)?)
}

#[derive(Serialize)]
struct TokenizeReport<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn handle_tokenize(line: &str, mode: OutputMode) -> Result<()> {
    let result = tokenize_line(line);

    if mode == OutputMode::Json {
        let report = match result {
            Ok(tokens) => TokenizeReport {
                input: line,
                tokens: Some(tokens),
                error: None,
            },
            Err(e) => TokenizeReport {
                input: line,
                tokens: None,
                error: Some(e.to_string()),
            },
        };
        output_json(&report);
        return Ok(());
    }

    match result {
        Ok(tokens) => {
            let rows = tokens
                .iter()
                .enumerate()
                .map(|(i, token)| vec![i.to_string(), token.clone(), quote(token)])
                .collect();
            print_table(&["#", "Token", "Quoted"], rows, "No tokens.");
        }
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}

#[derive(Serialize)]
struct QuoteReport<'a> {
    tokens: &'a [String],
    line: String,
}

pub fn handle_quote(tokens: &[String], mode: OutputMode) -> Result<()> {
    let line = join(tokens);
    match mode {
        OutputMode::Json => output_json(&QuoteReport { tokens, line }),
        OutputMode::Human => println!("{}", line),
    }
    Ok(())
}
