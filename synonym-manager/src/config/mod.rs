//! Configuration and dependency initialization for the synonym manager.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::Settings;
