//! Password generation.

pub mod charset;
mod config;
mod generate;

pub use config::GenerationConfig;
pub use generate::{GeneratedPassword, generate, generate_batch};
