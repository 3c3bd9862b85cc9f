//! Structured representation of a parsed curl command

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP method of a parsed request
///
/// The named variants form the set accepted in strict mode. `Other` carries
/// an arbitrary uppercased method and only appears in permissive mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Other(method) => method,
        }
    }

    /// Whether this is one of the known verbs
    pub fn is_known(&self) -> bool {
        !matches!(self, Method::Other(_))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ();

    /// Parses a known verb, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            "CONNECT" => Ok(Method::Connect),
            "TRACE" => Ok(Method::Trace),
            _ => Err(()),
        }
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value of a query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Credentials parsed from a `user:password` string
///
/// Serializes as a one or two element sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Option<&str>) -> Self {
        Self {
            username: username.into(),
            password: password.map(str::to_string),
        }
    }

    /// Split on the first colon
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((username, password)) => Self::new(username, Some(password)),
            None => Self::new(input, None),
        }
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.password.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.username)?;
        if let Some(password) = &self.password {
            seq.serialize_element(password)?;
        }
        seq.end()
    }
}

/// Proxy configuration derived from `-x` and `-U`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Proxy {
    /// Proxy string passed through as given, no credentials
    Bare(String),
    /// Scheme (`http`, `https`) to proxy URL with embedded credentials
    PerScheme(IndexMap<String, String>),
}

impl Proxy {
    /// Build the per-scheme mapping, embedding the raw credentials string.
    pub fn with_credentials(proxy: &str, user: &str) -> Self {
        let mut schemes = IndexMap::new();
        for scheme in ["http", "https"] {
            schemes.insert(
                scheme.to_string(),
                format!("{}://{}@{}/", scheme, user, proxy),
            );
        }
        Proxy::PerScheme(schemes)
    }
}

/// Fully parsed curl command
///
/// Built once by the parser and never mutated afterwards; two requests
/// compare equal when every field does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    pub method: Method,
    pub url: String,
    pub params: IndexMap<String, ParamValue>,
    pub data: Option<String>,
    pub data_binary: Option<String>,
    pub headers: IndexMap<String, String>,
    pub cookies: IndexMap<String, String>,
    pub insecure: bool,
    pub user: Option<Credentials>,
    pub proxy: Option<Proxy>,
    pub compressed: bool,
    pub include: bool,
    pub silent: bool,
}

impl ParsedRequest {
    /// The fields an HTTP client needs to issue the request.
    ///
    /// Keys keep a fixed order (`method`, `url`, `params`, `data`,
    /// `data_binary`, `headers`, `cookies`, `user`, `proxy`) and empty
    /// fields are left out.
    pub fn for_requests(&self) -> IndexMap<&'static str, Value> {
        let mut view = IndexMap::new();

        if !self.method.as_str().is_empty() {
            view.insert("method", Value::String(self.method.to_string()));
        }
        if !self.url.is_empty() {
            view.insert("url", Value::String(self.url.clone()));
        }
        if !self.params.is_empty() {
            view.insert("params", to_value(&self.params));
        }
        if let Some(data) = self.data.as_ref().filter(|d| !d.is_empty()) {
            view.insert("data", Value::String(data.clone()));
        }
        if let Some(data) = self.data_binary.as_ref().filter(|d| !d.is_empty()) {
            view.insert("data_binary", Value::String(data.clone()));
        }
        if !self.headers.is_empty() {
            view.insert("headers", to_value(&self.headers));
        }
        if !self.cookies.is_empty() {
            view.insert("cookies", to_value(&self.cookies));
        }
        if let Some(user) = &self.user {
            view.insert("user", to_value(user));
        }
        if let Some(proxy) = &self.proxy {
            view.insert("proxy", to_value(proxy));
        }

        view
    }
}

// Every type above serializes to plain strings, sequences and string-keyed
// maps, which serde_json cannot fail on.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
