use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod analysis;
mod config;

use analysis::{analyze_path, render_text};
use sarafu_ingest::{classify_document, DocumentKind};

#[derive(Parser, Debug)]
#[command(name = "sarafu", version, about = "Statement parsing and credit-risk summarization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements / bureau reports and print summaries
    Analyze {
        /// Decoded text or CSV statement files
        files: Vec<PathBuf>,

        /// Force a document kind instead of detecting one
        /// (mobile-money | bank | bureau)
        #[arg(long)]
        kind: Option<String>,

        /// Load a categorization rule table from a TOML file
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Detect and print each file's document kind
    Classify {
        files: Vec<PathBuf>,
    },

    /// Inspect the categorization rule table
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Dump the effective rule table as TOML
    Show {
        /// Rule table file (defaults to the built-in table)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Categorize one description with the effective table
    Test {
        description: String,

        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            files,
            kind,
            rules,
            json,
        } => analyze(files, kind, rules, json).await,

        Command::Classify { files } => classify(files),

        Command::Rules { command } => match command {
            RulesCommand::Show { rules } => {
                let table = config::load_rule_table(rules.as_deref())?;
                print!("{}", config::dump_rule_table(&table)?);
                Ok(())
            }
            RulesCommand::Test { description, rules } => {
                let table = config::load_rule_table(rules.as_deref())?;
                println!("{}", table.categorize(&description).name());
                Ok(())
            }
        },
    }
}

async fn analyze(
    files: Vec<PathBuf>,
    kind: Option<String>,
    rules: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if files.is_empty() {
        bail!("no input files (pass one or more statement files)");
    }

    let table = config::load_rule_table(rules.as_deref())?;
    let forced = kind.as_deref().map(parse_kind).transpose()?;

    // Documents are independent; fan out one task per file and collect in
    // input order.
    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            let table = table.clone();
            tokio::spawn(async move {
                let result = analyze_path(&path, forced, &table).await;
                (path, result)
            })
        })
        .collect();

    let mut total = 0usize;
    let mut failures = 0usize;
    for handle in handles {
        let (path, result) = handle.await.context("analysis task panicked")?;
        total += 1;

        match result {
            Ok(doc) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                } else {
                    render_text(&doc);
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("warning: {}: {:#}", path.display(), err);
            }
        }
    }

    if failures == total {
        bail!("all {total} documents failed");
    }
    Ok(())
}

fn classify(files: Vec<PathBuf>) -> Result<()> {
    if files.is_empty() {
        bail!("no input files");
    }

    for path in &files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("{}: {}", path.display(), classify_document(&filename, &text));
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<DocumentKind> {
    match s {
        "mobile-money" | "mpesa" => Ok(DocumentKind::MobileMoney),
        "bank" => Ok(DocumentKind::Bank),
        "bureau" | "crb" => Ok(DocumentKind::Bureau),
        other => bail!("unknown document kind: {other} (expected mobile-money | bank | bureau)"),
    }
}
