//! isbn-codes command line
//!
//! Check, convert, compare and extract book identifier codes.

use std::error::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use isbn_codes::{extract_codes, IdentifierCode, IdentifierKind, IsbnConfig, ValidationLevel};

#[derive(Parser)]
#[command(name = "isbn-codes", version, about = "Work with ISBN, EAN and UPC codes")]
struct Cli {
    /// Config file (.toml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Validation level, overrides the config file
    #[arg(long, global = true)]
    level: Option<ValidationLevel>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify and validate codes
    Check { codes: Vec<String> },
    /// Convert a code to another kind
    Convert {
        code: String,
        #[arg(long)]
        to: IdentifierKind,
    },
    /// Check whether two codes name the same book
    Compare { a: String, b: String },
    /// Find codes in text (reads stdin when no text is given)
    Extract { text: Option<String> },
}

#[derive(Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    kind: IdentifierKind,
    text: &'a str,
    valid: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every input was accepted.
fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => IsbnConfig::default(),
    };
    if let Some(level) = cli.level {
        config.validation_level = level;
    }
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Command::Check { codes } => {
            let mut all_valid = true;
            let mut reports = Vec::new();
            for input in &codes {
                let code = IdentifierCode::parse_with(input, &config);
                let valid = code.is_valid_for(config.validation_level);
                all_valid &= valid;
                reports.push((input.as_str(), code, valid));
            }
            if cli.json {
                let out: Vec<CheckReport> = reports
                    .iter()
                    .map(|(input, code, valid)| CheckReport {
                        input: *input,
                        kind: code.kind(),
                        text: code.text(),
                        valid: *valid,
                    })
                    .collect();
                print_json(&out)?;
            } else {
                for (input, code, valid) in &reports {
                    let verdict = if *valid { "ok" } else { "rejected" };
                    println!("{input}\t{}\t{}\t{verdict}", code.kind(), code.text());
                }
            }
            Ok(all_valid)
        }
        Command::Convert { code, to } => {
            let parsed = IdentifierCode::parse_with(&code, &config);
            let text = parsed.to_kind(to)?;
            if cli.json {
                print_json(&serde_json::json!({ "kind": to, "text": text }))?;
            } else {
                println!("{text}");
            }
            Ok(true)
        }
        Command::Compare { a, b } => {
            let same = IdentifierCode::parse_with(&a, &config)
                == IdentifierCode::parse_with(&b, &config);
            if cli.json {
                print_json(&serde_json::json!({ "equal": same }))?;
            } else {
                println!("{}", if same { "equal" } else { "different" });
            }
            Ok(same)
        }
        Command::Extract { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let found = extract_codes(&text, &config);
            if cli.json {
                print_json(&found)?;
            } else {
                for e in &found {
                    println!("{}\t{}\t{}", e.start_index, e.code.kind(), e.code.text());
                }
            }
            Ok(!found.is_empty())
        }
    }
}

fn load_config(path: &Path) -> Result<IsbnConfig, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => IsbnConfig::from_json(&contents)?,
        _ => IsbnConfig::from_toml(&contents)?,
    };
    Ok(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
