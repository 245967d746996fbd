//! Rendering of records into terminal output.
//!
//! Data flows one way: handlers hand records to this module and print what
//! comes back. Tables keep a stable line-to-record mapping so interactive
//! selection can resolve a line number back to its record by position.

pub mod messages;
pub mod projections;
pub mod result;
pub mod table;
pub mod views;

pub use result::CommandResult;
pub use table::{Column, Projection, Table};
