//! One module per subcommand; each exposes `execute`.

pub mod complete;
pub mod completions;
pub mod list;
pub mod new;
pub mod open;
pub mod remove;
pub mod template;
