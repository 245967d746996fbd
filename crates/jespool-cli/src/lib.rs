// NOTE: jespool Architecture Rationale
//
// Why a local spool archive (not live JES access)?
// - Output download tooling already produces directory snapshots of job output
// - Browsing offline needs no credentials and no host connection
// - The JobStore trait keeps a live backend possible without touching this crate
//
// Why line-based selection prompts (not an alternate-screen TUI)?
// - The drill-down is two numbered menus; full-screen state is not warranted
// - Piped stdin drives the exact same code path, which keeps the flow
//   scriptable and makes the interactive tests ordinary process tests

mod args;
mod commands;
pub mod config;
pub mod context;
mod drill;
mod handlers;
pub mod presentation;
mod prompt;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
