pub mod cedict;
pub mod entry;
pub mod loader;
mod script_index;

pub use cedict::{CeDict, parse_line, remove_surnames};
pub use entry::ChineseEntry;
pub use loader::CeDictLoader;
