pub mod completion;
pub mod config;
pub mod content;
pub mod version;
