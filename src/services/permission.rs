//! Permission policy evaluation.

use crate::models::PermissionPolicy;
use crate::sender::CommandSender;

/// Whether `sender` satisfies `policy`.
///
/// Order: console, any held node, then operator override. A policy with
/// no nodes is satisfied by nothing but those two.
pub fn is_permitted(sender: &dyn CommandSender, policy: &PermissionPolicy) -> bool {
    if sender.is_console() {
        return true;
    }
    if policy.nodes.iter().any(|node| sender.has_permission(node)) {
        return true;
    }
    policy.operator_override && sender.is_operator()
}

/// Lines telling `sender` which nodes would have let them through.
pub fn denial_lines(policy: &PermissionPolicy) -> Vec<String> {
    let mut lines = vec!["You do not have any of the required permission(s):".to_string()];
    lines.extend(policy.nodes.iter().map(|node| format!(" - {}", node)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::ConsoleSender;

    fn policy(nodes: &[&str], op: bool) -> PermissionPolicy {
        PermissionPolicy::new(nodes.iter().map(|n| n.to_string()).collect(), op)
    }

    #[test]
    fn test_any_node_suffices() {
        let p = policy(&["openwarp.warp.set", "openwarp.admin"], false);
        let alice = ConsoleSender::player("alice", vec!["openwarp.admin".to_string()]);
        assert!(is_permitted(&alice, &p));
    }

    #[test]
    fn test_operator_needs_override_flag() {
        let op = ConsoleSender::player("root", Vec::new()).with_operator(true);
        assert!(!is_permitted(&op, &policy(&["openwarp.warp.set"], false)));
        assert!(is_permitted(&op, &policy(&["openwarp.warp.set"], true)));
    }

    #[test]
    fn test_operator_override_without_nodes() {
        let op = ConsoleSender::player("root", Vec::new()).with_operator(true);
        let bob = ConsoleSender::player("bob", Vec::new());
        assert!(is_permitted(&op, &policy(&[], true)));
        assert!(!is_permitted(&bob, &policy(&[], true)));
    }

    #[test]
    fn test_console_bypasses() {
        let console = ConsoleSender::console();
        assert!(is_permitted(&console, &policy(&["openwarp.warp.set"], false)));
    }

    #[test]
    fn test_empty_policy_denies_players() {
        let bob = ConsoleSender::player("bob", Vec::new());
        let op = ConsoleSender::player("root", Vec::new()).with_operator(true);
        let empty = PermissionPolicy::default();
        assert!(!is_permitted(&bob, &empty));
        assert!(!is_permitted(&op, &empty));
        assert!(is_permitted(&ConsoleSender::console(), &empty));
    }

    #[test]
    fn test_denial_lines() {
        let lines = denial_lines(&policy(&["a.b", "c.d"], true));
        assert_eq!(
            lines,
            vec![
                "You do not have any of the required permission(s):",
                " - a.b",
                " - c.d"
            ]
        );
    }
}
