use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lexi", version, about = "English/Chinese dictionary lookups")]
pub struct Cli {
    /// ECDICT CSV table
    #[arg(long, global = true)]
    pub ecdict: Option<PathBuf>,

    /// ECDICT lemma list
    #[arg(long, global = true)]
    pub lemma: Option<PathBuf>,

    /// Zip archive containing CC-CEDICT
    #[arg(long, global = true)]
    pub cedict: Option<PathBuf>,

    /// Print human readable text instead of JSON
    #[arg(long, global = true)]
    pub plain: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up an English word
    En { word: String },

    /// List English words starting with a prefix
    EnPrefix {
        prefix: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Look up a Chinese word
    Zh {
        text: String,
        /// Match simplified instead of traditional characters
        #[arg(short, long)]
        simplified: bool,
    },

    /// List Chinese entries starting with a prefix
    ZhPrefix {
        text: String,
        #[arg(short, long)]
        simplified: bool,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show loaded entry counts and data attribution
    Info,
}

impl Command {
    pub fn needs_english(&self) -> bool {
        matches!(self, Command::En { .. } | Command::EnPrefix { .. } | Command::Info)
    }

    pub fn needs_chinese(&self) -> bool {
        matches!(self, Command::Zh { .. } | Command::ZhPrefix { .. } | Command::Info)
    }
}
