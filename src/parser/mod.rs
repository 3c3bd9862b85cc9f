//! curl command parsing
//!
//! A command goes through three stages, each stateless:
//!
//! 1. [`tokenizer`] checks the command verb and splits the text into words,
//! 2. [`flags`] maps the words onto the fixed flag schema,
//! 3. [`builder`] interprets the raw arguments into a [`ParsedRequest`].
//!
//! ```
//! let request = curlparse::parse(r#"curl -X POST -d "data" http://example.com"#).unwrap();
//! assert_eq!(request.method.as_str(), "POST");
//! assert_eq!(request.url, "http://example.com");
//! assert_eq!(request.data.as_deref(), Some("data"));
//! ```

use std::path::Path;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::request::ParsedRequest;
use crate::utils::FileUtils;

pub mod builder;
pub mod flags;
pub mod tokenizer;

/// Parse a curl command with the default (strict) configuration.
pub fn parse(command: &str) -> Result<ParsedRequest> {
    parse_with(command, &ParserConfig::default())
}

/// Parse a curl command with an explicit configuration.
pub fn parse_with(command: &str, config: &ParserConfig) -> Result<ParsedRequest> {
    let tokens = tokenizer::tokenize(command)?;
    let raw = flags::resolve(&tokens)?;
    log::debug!("resolved curl arguments: {:?}", raw);
    builder::build(raw, config)
}

/// Read a curl command from a file and parse it with the default configuration.
pub fn parse_from_path(path: impl AsRef<Path>) -> Result<ParsedRequest> {
    parse_from_path_with(path, &ParserConfig::default())
}

/// Read a curl command from a file and parse it.
///
/// A leading `~` in the path is expanded to the home directory.
pub fn parse_from_path_with(path: impl AsRef<Path>, config: &ParserConfig) -> Result<ParsedRequest> {
    let path = FileUtils::expand_path(&path.as_ref().to_string_lossy())?;
    FileUtils::check_file_readable(&path)?;
    let command = std::fs::read_to_string(&path)?;
    parse_with(&command, config)
}
