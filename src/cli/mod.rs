pub mod args;
pub mod commands;
pub mod session;

pub use args::CliArgs;
pub use commands::{apply_overrides, handle_commands};
pub use session::{apply_step, load_session, replay, ConsoleMenu, SessionStep};
