pub mod files;
pub mod list;
pub mod status;
pub mod view;
