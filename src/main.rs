//! Command-line interface (CLI) for boolang
//!
//! This binary wraps the [`Lexer`] and the [`analyze`] pipeline and exposes
//! two commands: `lex` prints the token table of a source file, and `parse`
//! additionally validates it and prints the tokens grouped by statement.
//! Input is read from `--input` or, if omitted, from standard input.

use anyhow::{Context, Result, bail};
use boolang::{AnalysisError, Lexer, Token, analyze};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes statements and prints the token table
    Lex {
        /// Input file with boolang statements (standard input if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Tokenizes and validates statements
    Parse {
        /// Input file with boolang statements (standard input if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Also list the variables defined by the program
        #[arg(short, long)]
        symbols: bool,
    },
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("can't open {:?}", path))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("can't read standard input")?;
            Ok(text)
        }
    }
}

/// Prints a `Statement | Lexeme | Category` table; rows without a statement
/// label leave the first column blank.
fn print_table(rows: &[(String, &Token)]) {
    let label_w = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0).max(9);
    let lexeme_w = rows
        .iter()
        .map(|(_, t)| t.lexeme().chars().count())
        .max()
        .unwrap_or(0)
        .max(6);
    println!("{:label_w$}  {:lexeme_w$}  Category", "Statement", "Lexeme");
    for (label, tok) in rows {
        println!("{:label_w$}  {:lexeme_w$}  {}", label, tok.lexeme(), tok.category());
    }
}

fn lex(text: &str) -> Result<()> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    let mut error = None;
    for item in lexer.by_ref() {
        match item {
            Ok(tok) => tokens.push(tok),
            Err(err) => error = Some(err),
        }
    }
    log::info!("Stats: {:?}", lexer.stats());

    let rows: Vec<_> = tokens.iter().map(|t| (String::new(), t)).collect();
    print_table(&rows);

    if let Some(err) = error {
        bail!(err);
    }
    Ok(())
}

fn parse(text: &str, symbols: bool) -> Result<()> {
    let analysis = analyze(text);
    match &analysis.outcome {
        Ok(parsed) => {
            let statements = analysis.statements();
            let rows: Vec<_> = statements
                .iter()
                .flat_map(|s| s.tokens.iter().map(move |t| (s.label(), t)))
                .collect();
            print_table(&rows);
            println!(
                "syntax analysis completed successfully ({} statements)",
                parsed.statements
            );
            if symbols {
                for name in analysis.symtab.names() {
                    match analysis.symtab.definition(name) {
                        Some(span) => println!("{name} defined at {}", span.start),
                        None => println!("{name}"),
                    }
                }
            }
            Ok(())
        }
        Err(AnalysisError::Lex(err)) => {
            bail!("lexical analysis failed, fix the text and try again: {err}")
        }
        Err(AnalysisError::Syntax(err)) => {
            let location = match err.span {
                Some(span) => span.start.to_string(),
                None => "end of input".to_string(),
            };
            bail!("{err} at {location}")
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Lex { input } => {
            let text = read_input(input.as_deref())?;
            lex(&text)
        }
        Commands::Parse { input, symbols } => {
            let text = read_input(input.as_deref())?;
            parse(&text, symbols)
        }
    }
}
