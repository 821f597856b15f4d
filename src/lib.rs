pub mod auth;
pub mod checks;
pub mod commands;
pub mod completions;
pub mod config;
pub mod detect;
pub mod logging;
pub mod probe;
pub mod registry;
pub mod report;
pub mod verify;
