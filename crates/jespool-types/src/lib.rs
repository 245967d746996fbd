pub mod filter;
pub mod job;

pub use filter::*;
pub use job::*;
