use clap::Parser as ClapParser;
use std::io::{self, Read};
use std::path::PathBuf;
use tql::cli::{self, CliError, RunOptions, RunResult};

#[derive(ClapParser)]
#[command(name = "tql")]
#[command(about = "tql - run SQL-like filter queries over CSV data")]
#[command(version)]
struct Cli {
    /// The TQL query, e.g. "select * from data.csv where a > 10"
    query: String,

    /// CSV file to query (overrides the FROM clause)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Only validate the query syntax, don't execute
    #[arg(long)]
    syntax_only: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = if !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(CliError::Io)?;
        Some(buffer)
    } else {
        None
    };

    let options = RunOptions {
        query: cli.query,
        file: cli.file,
        input,
        syntax_only: cli.syntax_only,
    };

    match cli::execute_run(&options)? {
        RunResult::SyntaxValid => println!("Syntax is valid"),
        RunResult::Rows(rows) => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&rows)
            } else {
                serde_json::to_string(&rows)
            }
            .unwrap();
            println!("{}", json);
        }
    }
    Ok(())
}
