pub mod cli;
pub mod config;
pub mod errors;
pub mod launcher;
pub mod registry;
pub mod templates;
