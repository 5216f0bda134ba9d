pub mod archive;
pub mod dictionary;
pub mod language;
