mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shell_cplex::{FileNameValidator, LogParser, ValidatorConfig};
use shell_solver::{SolveResult, SolverVersion};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect CPLEX shell transcripts and command-line file names"
)]
struct Cli {
    /// Log filter (overrides SHELL_TRACE), e.g. `debug` or `shell_cplex=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one or more captured CPLEX logs
    Parse(ParseArgs),
    /// Check a file name against a CPLEX version
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Captured log files
    #[arg(required = true)]
    logs: Vec<PathBuf>,

    /// Output format for stdout
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// File name as it would appear on the command line
    path: String,

    /// CPLEX version, e.g. 12.8.0
    #[arg(long = "cplex-version")]
    cplex_version: SolverVersion,

    /// What the file is for; only used in error messages
    #[arg(long, default_value = "log")]
    purpose: String,

    /// Validate as if the host used this directory separator
    #[arg(long)]
    separator: Option<char>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

#[derive(Debug, Serialize)]
struct ParseRecord {
    log: String,
    #[serde(flatten)]
    result: SolveResult,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    match cli.command {
        Command::Parse(args) => parse_command(args),
        Command::Validate(args) => validate_command(args),
    }
}

fn parse_command(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parser = LogParser::new();
    let mut records = Vec::with_capacity(args.logs.len());

    for path in &args.logs {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
        info!(
            component = "inspect",
            operation = "parse",
            log = %path.display(),
            bytes = text.len(),
            "Parsing log"
        );
        records.push(ParseRecord {
            log: path.display().to_string(),
            result: parser.parse(&text),
        });
    }

    render_output(args.format, &records)
}

fn validate_command(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ValidatorConfig::new();
    if let Some(separator) = args.separator {
        config = config.with_separator(separator);
    }
    let validated =
        FileNameValidator::new(config).validate(args.cplex_version, &args.path, &args.purpose)?;
    println!("{validated}");
    Ok(())
}

fn render_output(
    format: OutputFormat,
    records: &[ParseRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Table => {
            print_table(records);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
            Ok(())
        }
        OutputFormat::Ndjson => {
            for record in records {
                println!("{}", serde_json::to_string(record)?);
            }
            Ok(())
        }
    }
}

fn print_table(records: &[ParseRecord]) {
    println!(
        "{:<32} {:>8} {:>22} {:>6}  message",
        "log", "status", "termination", "code"
    );
    for record in records {
        let result = &record.result;
        let code = result
            .return_code()
            .map_or_else(|| "-".to_string(), |code| code.to_string());
        println!(
            "{:<32} {:>8} {:>22} {:>6}  {}",
            record.log,
            result.status(),
            result.termination_condition(),
            code,
            result.termination_message()
        );
    }
}
