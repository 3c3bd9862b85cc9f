//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::config::{CommandSource, Config, MethodMode, OutputView};
use crate::error::{CurlParseError, Result};
use crate::exit_code::exit_code_for_error;
use crate::output::OutputWriter;
use crate::parser;
use crate::utils::FileUtils;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;

/// Main entry point for the CLI application
pub fn run() {
    crate::logging::init();

    let app = create_app();
    let matches = app.get_matches();

    if let Err(e) = run_with_args(&matches) {
        eprintln!("curlparse: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run curlparse with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let config = build_config_from_args(matches)?;

    let request = match &config.source {
        CommandSource::Inline(command) => parser::parse_with(command, &config.parser)?,
        CommandSource::File(path) => parser::parse_from_path_with(path, &config.parser)?,
        CommandSource::Stdin => {
            let mut command = String::new();
            std::io::stdin().read_to_string(&mut command)?;
            parser::parse_with(&command, &config.parser)?
        }
    };

    OutputWriter::new(config.output).write(&request)
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("curlparse")
        .version(crate::VERSION)
        .about("Parse a curl command into a structured JSON request")
        .arg(Arg::new("command")
            .help("The full curl command, quoted as one argument (read from stdin when omitted)")
            .index(1)
            .conflicts_with("file"))
        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .value_name("PATH")
            .help("Read the curl command from a file"))
        .arg(Arg::new("method-mode")
            .long("method-mode")
            .value_name("MODE")
            .env("CURLPARSE_METHOD_MODE")
            .help("How to treat methods outside the known set: strict or permissive")
            .default_value("strict"))
        .arg(Arg::new("permissive")
            .long("permissive")
            .help("Shorthand for --method-mode permissive")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("requests")
            .long("requests")
            .help("Only print the fields an HTTP client needs, skipping empty ones")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("compact")
            .long("compact")
            .help("Print JSON on a single line")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write output to file"))
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::default();

    // Command source
    if let Some(command) = matches.get_one::<String>("command") {
        config.source = CommandSource::Inline(command.clone());
    } else if let Some(path) = matches.get_one::<String>("file") {
        config.source = CommandSource::File(FileUtils::expand_path(path)?);
    }

    // Method validation mode
    if let Some(mode_str) = matches.get_one::<String>("method-mode") {
        config.parser.method_mode = mode_str
            .parse::<MethodMode>()
            .map_err(|_| CurlParseError::Config(format!("Unknown method mode: {}", mode_str)))?;
    }
    if matches.get_flag("permissive") {
        config.parser.method_mode = MethodMode::Permissive;
    }

    // Configure output
    if matches.get_flag("requests") {
        config.output.view = OutputView::Requests;
    }
    config.output.pretty = !matches.get_flag("compact");

    if let Some(output_file) = matches.get_one::<String>("output") {
        config.output.file = Some(FileUtils::expand_path(output_file)?);
    }

    Ok(config)
}
