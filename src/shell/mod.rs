//! Shell-style line tokenizer.
//!
//! Splits a raw command line into words. Double quotes group words
//! (whitespace inside them is kept), a backslash makes the next character
//! literal, and quoted and bare segments that touch form a single word:
//!
//! ```
//! use warpcmd::shell::tokenize;
//!
//! let tokens = tokenize(r#"warp set "My Warp" public"#).unwrap();
//! assert_eq!(tokens, vec!["warp", "set", "My Warp", "public"]);
//! ```

mod state;

use thiserror::Error;

pub use state::{transition, Action, Referrer, State, ESCAPE, QUOTE};

/// Failure to tokenize a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended inside a `"..."` segment.
    #[error("Unterminated quoted string (opened at offset {offset})")]
    UnterminatedQuote { offset: usize },

    /// Input ended right after a `\`.
    #[error("Unexpected end of string after escape character")]
    TrailingEscape,
}

/// Incremental tokenizer driving [`transition`] one character at a time.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    state: State,
    word: String,
    tokens: Vec<String>,
    offset: usize,
    quote_offset: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            word: String::new(),
            tokens: Vec::new(),
            offset: 0,
            quote_offset: 0,
        }
    }

    /// Current machine state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Consume one character.
    pub fn feed(&mut self, ch: char) {
        let (next, action) = transition(self.state, ch);

        if ch == QUOTE && matches!(self.state, State::Start | State::Unquoted) {
            self.quote_offset = self.offset;
        }

        match action {
            Action::None => {}
            Action::Append(c) => self.word.push(c),
            Action::Flush => self.tokens.push(std::mem::take(&mut self.word)),
        }

        self.state = next;
        self.offset += 1;
    }

    /// Consume every character of `input`.
    pub fn feed_str(&mut self, input: &str) {
        for ch in input.chars() {
            self.feed(ch);
        }
    }

    /// Signal end of input and return the completed tokens.
    pub fn finish(mut self) -> Result<Vec<String>, ParseError> {
        match self.state {
            State::Start => {}
            // Unquoted always holds a started word, possibly an empty `""`.
            State::Unquoted => self.tokens.push(self.word),
            State::Quoted => {
                return Err(ParseError::UnterminatedQuote {
                    offset: self.quote_offset,
                })
            }
            State::Escape(_) => return Err(ParseError::TrailingEscape),
        }
        Ok(self.tokens)
    }
}

/// Split `input` into tokens.
///
/// Empty (or all-whitespace) input yields an empty list.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.feed_str(input);
    tokenizer.finish()
}

/// Like [`tokenize`], but a malformed line yields no tokens.
pub fn safe_tokenize(input: &str) -> Vec<String> {
    match tokenize(input) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::debug!(error = %e, "discarding malformed command line");
            Vec::new()
        }
    }
}

fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c == QUOTE || c == ESCAPE)
}

/// Render one token so that [`tokenize`] reads it back unchanged.
///
/// Plain words are returned as-is; anything else is wrapped in double
/// quotes with `"` and `\` escaped.
pub fn quote(token: &str) -> String {
    if !needs_quoting(token) {
        return token.to_string();
    }

    let mut out = String::with_capacity(token.len() + 2);
    out.push(QUOTE);
    for c in token.chars() {
        if c == QUOTE || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}

/// Quote every token and join them with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
