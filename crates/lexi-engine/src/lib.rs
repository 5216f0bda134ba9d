pub mod engine;
pub mod error;
pub mod info;
pub mod source;

pub use engine::LexicalEngine;
pub use error::EngineError;
pub use info::{Attribution, EngineInfo};
pub use source::RawSources;

#[cfg(test)]
mod tests;
