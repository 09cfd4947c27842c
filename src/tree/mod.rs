//! Directory tree walking and printing
//!
//! The walker recursively lists a directory, applies visibility/type/depth
//! filters, and draws the result with `tree`-style branch connectors.

mod config;
mod walker;

pub use config::WalkerConfig;
pub use walker::TreeWalker;
