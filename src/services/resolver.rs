//! Picks the single best command for a token list.
//!
//! Every key of every registration that is a word prefix of the tokens is a
//! candidate. Candidates are scanned in registration order:
//!
//! - a key with more words than the current best always takes over;
//! - a key with the same word count takes over only if the arguments left
//!   after stripping it fit that key's range.
//!
//! So `warp detail` beats `warp`, and of two equally long aliases the later
//! one wins whenever its arity fits, even if the earlier one fit too.

use serde::Serialize;

use crate::models::CommandKey;
use crate::registry::{CommandRegistration, CommandRegistry};

/// One matching (command, key) pair from a resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'r> {
    pub command: &'r CommandRegistration,
    pub key: &'r CommandKey,
    /// Arguments left once the key words are removed.
    pub remaining: usize,
}

impl MatchCandidate<'_> {
    pub fn specificity(&self) -> usize {
        self.key.specificity()
    }

    /// Whether the remaining argument count fits the key's range.
    pub fn arity_ok(&self) -> bool {
        self.key.accepts(self.remaining)
    }
}

/// The winning candidate plus its argument list.
#[derive(Debug, Clone)]
pub struct Resolution<'r> {
    pub command: &'r CommandRegistration,
    pub key: &'r CommandKey,
    pub args: Vec<String>,
}

impl Resolution<'_> {
    pub fn arity_ok(&self) -> bool {
        self.key.accepts(self.args.len())
    }

    pub fn summary(&self) -> ResolutionSummary {
        ResolutionSummary {
            command: self.command.spec.name.clone(),
            key: self.key.to_string(),
            args: self.args.clone(),
            expected: self.key.args().to_string(),
            arity_ok: self.arity_ok(),
        }
    }
}

/// Owned, serializable view of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub command: String,
    pub key: String,
    pub args: Vec<String>,
    pub expected: String,
    pub arity_ok: bool,
}

/// Every (command, key) pair whose key prefixes `tokens`, in registration order.
pub fn candidates<'r, S: AsRef<str>>(
    tokens: &[S],
    registry: &'r CommandRegistry,
) -> Vec<MatchCandidate<'r>> {
    registry
        .iter()
        .flat_map(|command| {
            command
                .spec
                .keys
                .iter()
                .filter(|key| key.matches(tokens))
                .map(move |key| MatchCandidate {
                    command,
                    key,
                    remaining: tokens.len() - key.specificity(),
                })
        })
        .collect()
}

/// Apply the specificity / arity tie-break to `candidates`.
pub fn select<'r>(candidates: &[MatchCandidate<'r>]) -> Option<MatchCandidate<'r>> {
    let mut best: Option<MatchCandidate<'r>> = None;

    for candidate in candidates {
        let best_specificity = best.map_or(0, |b| b.specificity());
        if candidate.specificity() > best_specificity
            || (candidate.specificity() == best_specificity && candidate.arity_ok())
        {
            best = Some(*candidate);
        }
    }

    best
}

/// Resolve `tokens` against `registry`.
pub fn resolve<'r, S: AsRef<str>>(
    tokens: &[S],
    registry: &'r CommandRegistry,
) -> Option<Resolution<'r>> {
    let found = candidates(tokens, registry);
    tracing::debug!(candidates = found.len(), "resolving command");

    let best = select(&found)?;
    Some(Resolution {
        command: best.command,
        key: best.key,
        args: best.key.strip(tokens),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArgRange, CommandSpec};
    use crate::sender::CommandSender;

    fn noop(_: &dyn CommandSender, _: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    fn register(registry: &mut CommandRegistry, name: &str, key: &str, args: ArgRange) {
        let spec = CommandSpec::builder(name)
            .key(key)
            .args(args)
            .build()
            .unwrap();
        registry.register(spec, noop);
    }

    #[test]
    fn test_no_candidates() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Back", "back", ArgRange::exactly(0));
        assert!(resolve(&["warp"], &registry).is_none());
        assert!(resolve::<&str>(&[], &registry).is_none());
    }

    #[test]
    fn test_more_specific_key_wins() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Warp", "warp", ArgRange::unbounded(0));
        register(&mut registry, "Warp detail", "warp detail", ArgRange::exactly(1));

        let r = resolve(&["warp", "detail", "community"], &registry).unwrap();
        assert_eq!(r.command.spec.name, "Warp detail");
        assert_eq!(r.args, vec!["community"]);
    }

    #[test]
    fn test_specific_key_wins_even_with_bad_arity() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Warp", "warp", ArgRange::unbounded(0));
        register(&mut registry, "Warp detail", "warp detail", ArgRange::exactly(1));

        let r = resolve(&["warp", "detail"], &registry).unwrap();
        assert_eq!(r.command.spec.name, "Warp detail");
        assert!(!r.arity_ok());
    }

    #[test]
    fn test_equal_specificity_later_valid_wins() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Strict", "warp set", ArgRange::exactly(1));
        register(&mut registry, "Loose", "warp set", ArgRange::new(1, 2).unwrap());

        let r = resolve(&["warp", "set", "X", "public"], &registry).unwrap();
        assert_eq!(r.command.spec.name, "Loose");
        assert_eq!(r.args, vec!["X", "public"]);
    }

    #[test]
    fn test_equal_specificity_later_invalid_keeps_earlier() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Loose", "warp set", ArgRange::new(1, 2).unwrap());
        register(&mut registry, "Strict", "warp set", ArgRange::exactly(1));

        let r = resolve(&["warp", "set", "X", "public"], &registry).unwrap();
        assert_eq!(r.command.spec.name, "Loose");
    }

    #[test]
    fn test_candidates_listed_in_registration_order() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Warp detail", "warp detail", ArgRange::exactly(1));
        register(&mut registry, "Warp", "warp", ArgRange::unbounded(0));
        register(&mut registry, "Back", "back", ArgRange::exactly(0));

        let found = candidates(&["warp", "detail", "x"], &registry);
        let names: Vec<&str> = found.iter().map(|c| c.command.spec.name.as_str()).collect();
        assert_eq!(names, vec!["Warp detail", "Warp"]);
        assert_eq!(found[0].remaining, 1);
        assert_eq!(found[1].remaining, 2);

        // Registration order does not change who wins on specificity.
        let r = resolve(&["warp", "detail", "x"], &registry).unwrap();
        assert_eq!(r.command.spec.name, "Warp detail");
    }

    #[test]
    fn test_every_key_of_a_command_is_a_candidate() {
        let spec = CommandSpec::builder("Back")
            .key("back")
            .key_with_args("back", ArgRange::exactly(0))
            .args(ArgRange::exactly(0))
            .build()
            .unwrap();
        let mut registry = CommandRegistry::new();
        registry.register(spec, noop);

        assert_eq!(candidates(&["back"], &registry).len(), 2);
    }

    #[test]
    fn test_summary() {
        let mut registry = CommandRegistry::new();
        register(&mut registry, "Warp unshare", "warp unshare", ArgRange::exactly(2));
        let summary = resolve(&["warp", "unshare", "MyWarp"], &registry)
            .unwrap()
            .summary();
        assert_eq!(
            summary,
            ResolutionSummary {
                command: "Warp unshare".into(),
                key: "warp unshare".into(),
                args: vec!["MyWarp".into()],
                expected: "2".into(),
                arity_ok: false,
            }
        );
    }
}
