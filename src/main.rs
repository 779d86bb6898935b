//! Nova compiler - CLI

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nova::{
    errors::errors::Error,
    lexer::lexer::{tokenize, Scanner},
    logger::{self, LogLevel},
    parser::parser::parse,
    render_error,
    type_checker::type_checker::type_check,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "nova")]
#[command(version, about = "Front end for the Nova language", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan, parse and type check a source file, then print the AST and symbol table
    Compile {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the token stream before the AST
        #[arg(long)]
        tokens: bool,
    },

    /// Produce an executable (no back end yet)
    Build {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    match args.command {
        Commands::Compile { file, tokens } => {
            let source =
                fs::read(&file).with_context(|| format!("Failed to read: {}", file.display()))?;

            match compile(&source, tokens) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(error) => {
                    let text = String::from_utf8_lossy(&source);
                    eprint!("{}", render_error(&error, &file.to_string_lossy(), &text));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Build { file } => {
            anyhow::bail!("build {}: not implemented", file.display())
        }
    }
}

fn compile(source: &[u8], dump_tokens: bool) -> Result<(), Error> {
    let start = Instant::now();

    if dump_tokens {
        let tokens = tokenize(source)?;
        info!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");
        println!("tokens:");
        for token in tokens.iter() {
            println!("{} {}", token.position, token);
        }
    }

    let parse_start = Instant::now();
    let file = parse(Scanner::new(source))?;
    info!(elapsed = ?parse_start.elapsed(), "parsed");

    let check_start = Instant::now();
    let info = type_check(&file)?;
    info!(elapsed = ?check_start.elapsed(), "type checked");

    println!("syntax ast:");
    print!("{}", file);
    println!("type info:");
    print!("{}", info);

    info!(elapsed = ?start.elapsed(), "total");
    Ok(())
}
