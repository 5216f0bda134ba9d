pub mod ecdict;
pub mod entry;
pub mod lemma;

pub use ecdict::{EcDict, parse_table};
pub use entry::{EnglishEntry, Exchange, ExchangeKind};
pub use lemma::LemmaMap;
