pub mod commands;
pub mod dispatch;
pub mod resolve;
pub mod shell;
