pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod logging;
pub mod pipeline;
pub mod tokenizer;

pub use context::{emitter, filter, markdown, walker};
