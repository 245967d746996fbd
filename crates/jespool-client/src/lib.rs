pub mod archive;
pub mod error;
pub mod store;

pub use archive::SpoolArchive;
pub use error::{Error, Result};
pub use store::JobStore;
