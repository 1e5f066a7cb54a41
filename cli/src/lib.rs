pub mod commands;
pub mod context;
pub mod repl;
pub mod replay;

pub use context::CliContext;
pub use repl::readline;
