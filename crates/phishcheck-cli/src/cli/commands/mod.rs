//! CLI command handlers.

mod check;
mod interactive;
mod render;

pub use check::run_check;
pub use interactive::run_interactive;
