use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lafal_engine::{Normalizer, TokenClass};

#[derive(Parser)]
#[command(name = "lafaltool", about = "Spoken-form normalization diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a single classified token
    Convert {
        /// Token class label (e.g. TIME, FRACTION)
        class: String,
        /// Token text
        token: String,
        /// Use the corrected ELECTRONIC rendering instead of the
        /// data-faithful one
        #[arg(long)]
        sensible: bool,
    },
    /// Normalize CLASS<TAB>token lines from a file, or stdin when omitted
    Batch {
        /// Input file
        file: Option<String>,
        /// Emit one JSON object per line instead of aligned text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Record<'a> {
    token: &'a str,
    class: TokenClass,
    normalized: &'a str,
}

fn main() {
    let cli = Cli::parse();
    let normalizer = Normalizer::new();

    match cli.command {
        Command::Convert {
            class,
            token,
            sensible,
        } => {
            if sensible {
                println!("{}", normalizer.normalize_sensible(&token));
                return;
            }
            let class = TokenClass::from_str(&class).unwrap_or_else(|err| {
                eprintln!("{err}");
                process::exit(1);
            });
            match normalizer.normalize(class, &token) {
                Ok(text) => println!("{text}"),
                Err(err) => {
                    eprintln!("{err}");
                    process::exit(1);
                }
            }
        }
        Command::Batch { file, json } => {
            let reader: Box<dyn BufRead> = match file {
                Some(path) => match File::open(&path) {
                    Ok(f) => Box::new(BufReader::new(f)),
                    Err(err) => {
                        eprintln!("{path}: {err}");
                        process::exit(1);
                    }
                },
                None => Box::new(BufReader::new(io::stdin())),
            };

            // Collect everything first so the text layout can size the
            // token column.
            let mut rows: Vec<(String, TokenClass, String)> = Vec::new();
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        eprintln!("{err}");
                        process::exit(1);
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let Some((label, token)) = line.split_once('\t') else {
                    eprintln!("malformed line (expected CLASS<TAB>token): {line}");
                    process::exit(1);
                };
                let class = TokenClass::from_str(label).unwrap_or_else(|err| {
                    eprintln!("{err}");
                    process::exit(1);
                });
                let normalized = match normalizer.normalize(class, token) {
                    Ok(text) => text,
                    Err(err) => {
                        eprintln!("{err}");
                        process::exit(1);
                    }
                };
                rows.push((token.to_string(), class, normalized));
            }

            if json {
                for (token, class, normalized) in &rows {
                    let record = Record {
                        token: token.as_str(),
                        class: *class,
                        normalized: normalized.as_str(),
                    };
                    match serde_json::to_string(&record) {
                        Ok(line) => println!("{line}"),
                        Err(err) => {
                            eprintln!("{err}");
                            process::exit(1);
                        }
                    }
                }
            } else {
                let token_width = rows.iter().map(|(t, _, _)| t.width()).max().unwrap_or(0);
                for (token, _, normalized) in &rows {
                    let pad = token_width.saturating_sub(token.width());
                    println!("{token}{:pad$}  {normalized}", "");
                }
            }
        }
    }
}
