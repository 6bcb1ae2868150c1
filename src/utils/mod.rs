pub mod formatting;
pub mod config;
pub mod parsing;

// Re-exports
pub use config::*;
pub use parsing::*;
