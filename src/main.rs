//! numstat: CLI entry point.
//!
//! One-shot mode when the number list is given as an argument; otherwise
//! reads lines from stdin and stays interactive after input errors.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use numstat::export::export_csv;
use numstat::parser::DEFAULT_DELIMITER;
use numstat::report::{render_error, render_table};
use numstat::stats::compute_with_delimiter;
use numstat::types::StatsSummary;

#[derive(Parser)]
#[command(name = "numstat")]
#[command(about = "Descriptive statistics for delimiter-separated number lists")]
#[command(version)]
struct Cli {
    /// Numbers separated by the delimiter (reads stdin when omitted).
    numbers: Option<String>,

    /// Field delimiter.
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Emit the summary as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Also write the summary as a two-column CSV file.
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.numbers {
        Some(ref input) => run_once(input, &cli),
        None => run_interactive(&cli),
    }
}

fn run_once(input: &str, cli: &Cli) -> anyhow::Result<()> {
    let summary = match compute_with_delimiter(input, cli.delimiter) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            std::process::exit(1);
        }
    };

    print_summary(&summary, cli)?;

    if let Some(ref path) = cli.export {
        export_csv(&summary, path)?;
        println!("Exported to {}", path.display());
    }

    Ok(())
}

fn run_interactive(cli: &Cli) -> anyhow::Result<()> {
    println!(
        "Enter numbers separated by '{}' (Ctrl-D to quit)",
        cli.delimiter
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match compute_with_delimiter(line, cli.delimiter) {
            Ok(summary) => {
                print_summary(&summary, cli)?;

                if let Some(ref path) = cli.export {
                    match export_csv(&summary, path) {
                        Ok(()) => println!("Exported to {}", path.display()),
                        Err(e) => eprintln!("{} {e:#}", "error:".red().bold()),
                    }
                }
            }
            // Input errors never end the session; the user corrects and retries.
            Err(e) => eprintln!("{}", render_error(&e)),
        }
    }

    Ok(())
}

fn print_summary(summary: &StatsSummary, cli: &Cli) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_table(summary));
    }
    Ok(())
}
