pub mod dispatcher;
pub mod help;
pub mod permission;
pub mod resolver;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use help::{help_lines, send_help};
pub use permission::{denial_lines, is_permitted};
pub use resolver::{
    candidates, resolve, select, MatchCandidate, Resolution, ResolutionSummary,
};
