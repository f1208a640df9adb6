pub mod emitter;
pub mod filter;
pub mod markdown;
pub mod walker;
