pub mod command;
pub mod key;
pub mod manifest;

pub use command::{CommandSpec, CommandSpecBuilder, PermissionPolicy};
pub use key::{ArgRange, CommandKey};
pub use manifest::{CommandEntry, CommandManifest, KeyEntry, DEFAULT_MANIFEST};
