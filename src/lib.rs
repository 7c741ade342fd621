pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod models;
pub mod registry;
pub mod sender;
pub mod services;
pub mod shell;

pub use error::WarpCmdError;
