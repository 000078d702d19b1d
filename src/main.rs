use clap::{Parser as ClapParser, Subcommand};
use sieve_lang::cli::{self, CliError, CompileOptions, CompileResult};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sieve")]
#[command(about = "Sieve - compile filter expressions into document-database query filters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a filter expression into a query document
    Compile {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print a document
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the token stream of a filter expression
    Tokens {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            filter,
            pretty,
            syntax_only,
        } => run_compile(filter, pretty, syntax_only),
        Commands::Tokens { filter } => run_tokens(filter),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_filter(filter: Option<String>) -> Result<String, CliError> {
    match filter {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_compile(
    filter: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let options = CompileOptions {
        filter: read_filter(filter)?,
        pretty,
        syntax_only,
    };

    match cli::execute_compile(&options)? {
        CompileResult::SyntaxValid => println!("Syntax is valid"),
        CompileResult::Document(doc) => {
            let json = if pretty {
                serde_json::to_string_pretty(&doc)
            } else {
                serde_json::to_string(&doc)
            }
            .unwrap();
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_tokens(filter: Option<String>) -> Result<(), CliError> {
    let filter = read_filter(filter)?;
    for line in cli::token_lines(filter.trim_end()) {
        println!("{}", line);
    }
    Ok(())
}
