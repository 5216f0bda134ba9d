use clap::Parser;
use lexi_config::Config;
use lexi_core::dictionary::DictionaryEntry;
use lexi_engine::LexicalEngine;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
mod io;

use self::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::new();
    init_tracing(cli.json_logs || config.log_json);

    let sources = io::read_sources(&cli, &config.data)?;
    let default_limit = config.engine.default_limit;
    let engine = LexicalEngine::new(sources, config.engine);

    run(&engine, &cli, default_limit)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(engine: &LexicalEngine, cli: &Cli, default_limit: usize) -> anyhow::Result<()> {
    // Surface build failures instead of reporting every query as not found
    if cli.command.needs_english() {
        engine.try_english()?;
    }
    if cli.command.needs_chinese() {
        engine.try_chinese()?;
    }

    match &cli.command {
        Command::En { word } => {
            let entry = engine.english_lookup(word);
            if cli.plain {
                print_entry(word, entry);
                for exchange in entry.map(|e| e.exchanges()).unwrap_or_default() {
                    println!("  {}: {}", exchange.kind.as_str(), exchange.form);
                }
            } else {
                print_json(&entry)?;
            }
        }
        Command::EnPrefix { prefix, limit } => {
            let words = engine.english_prefix_query(prefix, limit.unwrap_or(default_limit));
            if cli.plain {
                words.iter().for_each(|w| println!("{w}"));
            } else {
                print_json(&words)?;
            }
        }
        Command::Zh { text, simplified } => {
            let entry = engine.chinese_lookup(text, *simplified);
            if cli.plain {
                print_entry(text, entry);
            } else {
                print_json(&entry)?;
            }
        }
        Command::ZhPrefix {
            text,
            simplified,
            limit,
        } => {
            let entries =
                engine.chinese_prefix_query(text, *simplified, limit.unwrap_or(default_limit));
            if cli.plain {
                for entry in entries {
                    println!(
                        "{} {} [{}] {}",
                        entry.traditional, entry.simplified, entry.pinyin, entry.english
                    );
                }
            } else {
                print_json(&entries)?;
            }
        }
        Command::Info => print_json(&engine.info())?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entry<E: DictionaryEntry>(query: &str, entry: Option<&E>) {
    let Some(entry) = entry else {
        println!("No entry for {}", query.trim());
        return;
    };

    let result = entry.to_lookup_result();
    if result.readings.is_empty() {
        println!("{}", result.term);
    } else {
        println!("{} [{}]", result.term, result.readings.join(", "));
    }
    for definition in result.definitions {
        println!("  {definition}");
    }
}
