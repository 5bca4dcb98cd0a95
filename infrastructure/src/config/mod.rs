//! Configuration file loading.

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLogConfig, FileQuizConfig};
pub use loader::ConfigLoader;
