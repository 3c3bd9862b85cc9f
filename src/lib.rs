//! curlparse - turn curl command lines into structured requests
//!
//! This crate parses the familiar `curl ...` invocation (as copied from a
//! browser's developer tools, for instance) into a [`ParsedRequest`]: method,
//! URL and query parameters, bodies, headers, cookies, credentials and proxy
//! settings. Nothing is sent over the network.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod output;
pub mod parser;
pub mod request;
pub mod utils;

pub use config::{MethodMode, ParserConfig};
pub use error::{CurlParseError, Result};
pub use parser::{parse, parse_from_path, parse_from_path_with, parse_with};
pub use request::{Credentials, Method, ParamValue, ParsedRequest, Proxy};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
