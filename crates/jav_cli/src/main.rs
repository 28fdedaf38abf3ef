// jav CLI entry point
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use jav_lexer::Lexer;

#[derive(Parser)]
#[command(name = "jav", version, about = "jav language tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a source file and dump the token stream.
    Lex {
        path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Include whitespace and comment tokens.
        #[arg(long)]
        trivia: bool,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lex {
            path,
            format,
            trivia,
        } => lex_command(&path, format, trivia),
    }
}

fn lex_command(path: &PathBuf, format: Format, trivia: bool) -> Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut lexer = Lexer::with_source_id(&source, path.display().to_string());
    let tokens: Vec<_> = lexer
        .tokenize()
        .into_iter()
        .filter(|t| trivia || !t.is_trivia())
        .collect();

    match format {
        Format::Text => {
            for token in &tokens {
                println!(
                    "{}:{} [{}..{}] {:?} {:?}",
                    token.line, token.column, token.span.start, token.span.end, token.kind,
                    token.lexeme
                );
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
    }

    let source_id = lexer.source_id().unwrap_or("<input>").to_string();
    let diagnostics = lexer.diagnostics();
    for error in diagnostics {
        eprintln!(
            "{}:{}:{}: error: {}",
            source_id,
            error.line,
            error.column,
            error.message()
        );
    }

    if diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
