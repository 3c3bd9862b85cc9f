//! Configuration management for curlparse

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The leading word every supported command must start with
pub const COMMAND_VERB: &str = "curl";

/// How the parser treats a method outside the known verb set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MethodMode {
    /// Reject unknown methods; binary data always forces POST
    #[default]
    Strict,
    /// Accept any uppercased method; an explicit `-X` wins over binary data
    Permissive,
}

impl fmt::Display for MethodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            MethodMode::Strict => "strict",
            MethodMode::Permissive => "permissive",
        };
        write!(f, "{}", mode)
    }
}

impl FromStr for MethodMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(MethodMode::Strict),
            "permissive" | "force" => Ok(MethodMode::Permissive),
            _ => Err(()),
        }
    }
}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub method_mode: MethodMode,
}

impl ParserConfig {
    pub fn permissive() -> Self {
        Self {
            method_mode: MethodMode::Permissive,
        }
    }
}

/// Where the binary reads the curl command from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

/// Which representation of the request gets written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputView {
    #[default]
    Full,
    /// Only the fields an HTTP client needs, empty ones dropped
    Requests,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    pub view: OutputView,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            file: None,
            view: OutputView::Full,
            pretty: true,
        }
    }
}

/// Main configuration struct for the binary
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CommandSource,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: CommandSource::Stdin,
            parser: ParserConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
