//! Command keys and argument-count ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WarpCmdError;

/// Inclusive range of accepted argument counts. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgRange {
    #[serde(default)]
    pub min: usize,
    #[serde(default)]
    pub max: Option<usize>,
}

impl Default for ArgRange {
    fn default() -> Self {
        Self::unbounded(0)
    }
}

impl ArgRange {
    /// `[min, max]`, rejecting `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, WarpCmdError> {
        if min > max {
            return Err(WarpCmdError::InvalidArgRange { min, max });
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// Exactly `n` arguments.
    pub fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// At least `min` arguments, no upper limit.
    pub fn unbounded(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Re-check a range that came from deserialization.
    pub fn validate(self) -> Result<Self, WarpCmdError> {
        match self.max {
            Some(max) if self.min > max => Err(WarpCmdError::InvalidArgRange {
                min: self.min,
                max,
            }),
            _ => Ok(self),
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for ArgRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}

/// A literal word prefix (e.g. `warp detail`) that invokes a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandKey {
    words: Vec<String>,
    args: ArgRange,
}

impl CommandKey {
    /// Build a key from a space-separated string. The first word is
    /// stored lower-cased since command labels arrive lower-cased.
    pub fn parse(key: &str, args: ArgRange) -> Result<Self, WarpCmdError> {
        let mut words: Vec<String> = key.split_whitespace().map(str::to_string).collect();
        match words.first_mut() {
            Some(first) => *first = first.to_lowercase(),
            None => return Err(WarpCmdError::InvalidKey(key.to_string())),
        }
        Ok(Self {
            words,
            args: args.validate()?,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the key.
    pub fn specificity(&self) -> usize {
        self.words.len()
    }

    pub fn args(&self) -> ArgRange {
        self.args
    }

    /// Whether every key word is a leading token of `tokens`, in order.
    ///
    /// The first word is compared case-insensitively, later words exactly.
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        if tokens.len() < self.words.len() {
            return false;
        }
        self.words
            .iter()
            .zip(tokens)
            .enumerate()
            .all(|(i, (word, token))| {
                let token = token.as_ref();
                if i == 0 {
                    token.to_lowercase() == *word
                } else {
                    token == word
                }
            })
    }

    /// Whether `count` remaining arguments satisfy this key's range.
    pub fn accepts(&self, count: usize) -> bool {
        self.args.contains(count)
    }

    /// The tokens left after removing this key's words from the front.
    pub fn strip<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .skip(self.words.len())
            .map(|t| t.as_ref().to_string())
            .collect()
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}
