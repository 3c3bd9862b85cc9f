//! Flag schema and resolution of tokens into raw arguments

use crate::error::{CurlParseError, Result};

/// How many values a flag takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean switch, no value
    Switch,
    /// Single value, last occurrence wins
    Value,
    /// Repeatable value, every occurrence kept in order
    Append,
}

/// Destination of a recognized flag in [`RawArguments`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Method,
    Data,
    DataBinary,
    Header,
    Compressed,
    Insecure,
    User,
    Include,
    Silent,
    Proxy,
}

/// One entry of the flag schema
#[derive(Debug)]
pub struct FlagSpec {
    pub kind: FlagKind,
    pub short: Option<char>,
    pub long: &'static [&'static str],
    pub arity: Arity,
}

impl FlagSpec {
    const fn new(
        kind: FlagKind,
        short: Option<char>,
        long: &'static [&'static str],
        arity: Arity,
    ) -> Self {
        Self {
            kind,
            short,
            long,
            arity,
        }
    }
}

/// Every flag the parser understands
pub static FLAG_SCHEMA: &[FlagSpec] = &[
    FlagSpec::new(FlagKind::Method, Some('X'), &["request"], Arity::Value),
    FlagSpec::new(FlagKind::Data, Some('d'), &["data"], Arity::Value),
    FlagSpec::new(
        FlagKind::DataBinary,
        Some('b'),
        &["data-binary", "data-raw"],
        Arity::Value,
    ),
    FlagSpec::new(FlagKind::Header, Some('H'), &["header"], Arity::Append),
    FlagSpec::new(FlagKind::Compressed, None, &["compressed"], Arity::Switch),
    FlagSpec::new(FlagKind::Insecure, Some('k'), &["insecure"], Arity::Switch),
    FlagSpec::new(FlagKind::User, Some('U'), &["user"], Arity::Value),
    FlagSpec::new(FlagKind::Include, Some('i'), &["include"], Arity::Switch),
    FlagSpec::new(FlagKind::Silent, Some('s'), &["silent"], Arity::Switch),
    FlagSpec::new(FlagKind::Proxy, Some('x'), &["proxy"], Arity::Value),
];

/// Unrecognized curl flags whose value must be skipped along with them
static FOREIGN_SHORT_WITH_VALUE: &[char] = &[
    'A', 'c', 'C', 'D', 'e', 'E', 'F', 'K', 'm', 'o', 'P', 'Q', 'r', 't', 'T', 'u', 'w', 'y',
    'Y', 'z',
];

static FOREIGN_LONG_WITH_VALUE: &[&str] = &[
    "aws-sigv4",
    "cacert",
    "capath",
    "cert",
    "config",
    "connect-timeout",
    "continue-at",
    "cookie",
    "cookie-jar",
    "data-ascii",
    "data-urlencode",
    "dump-header",
    "form",
    "ftp-port",
    "interface",
    "json",
    "key",
    "limit-rate",
    "max-filesize",
    "max-redirs",
    "max-time",
    "oauth2-bearer",
    "output",
    "proxy-header",
    "proxy-user",
    "quote",
    "range",
    "referer",
    "resolve",
    "retry",
    "retry-delay",
    "telnet-option",
    "time-cond",
    "unix-socket",
    "upload-file",
    "url-query",
    "user-agent",
    "variable",
    "write-out",
];

fn find_short(flag: char) -> Option<&'static FlagSpec> {
    FLAG_SCHEMA.iter().find(|spec| spec.short == Some(flag))
}

fn find_long(name: &str) -> Option<&'static FlagSpec> {
    FLAG_SCHEMA.iter().find(|spec| spec.long.contains(&name))
}

/// Arguments resolved from the token list, before interpretation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArguments {
    pub command: String,
    pub url: String,
    pub data: Option<String>,
    pub data_binary: Option<String>,
    /// `None` until `-X` is given
    pub method: Option<String>,
    pub headers: Vec<String>,
    pub compressed: bool,
    pub insecure: bool,
    pub include: bool,
    pub silent: bool,
    pub user: Option<String>,
    pub proxy: Option<String>,
}

impl RawArguments {
    fn set_switch(&mut self, kind: FlagKind) {
        match kind {
            FlagKind::Compressed => self.compressed = true,
            FlagKind::Insecure => self.insecure = true,
            FlagKind::Include => self.include = true,
            FlagKind::Silent => self.silent = true,
            other => log::debug!("flag {:?} is not a switch", other),
        }
    }

    fn set_value(&mut self, kind: FlagKind, value: String) {
        match kind {
            FlagKind::Method => self.method = Some(value),
            FlagKind::Data => self.data = Some(value),
            FlagKind::DataBinary => self.data_binary = Some(value),
            FlagKind::Header => self.headers.push(value),
            FlagKind::User => self.user = Some(value),
            FlagKind::Proxy => self.proxy = Some(value),
            other => log::debug!("flag {:?} takes no value", other),
        }
    }
}

/// Map a token list onto the flag schema.
///
/// The first positional is the command verb, the second the URL; further
/// positionals and unknown flags are ignored.
pub fn resolve(tokens: &[String]) -> Result<RawArguments> {
    let mut raw = RawArguments::default();
    let mut positionals: Vec<String> = Vec::new();
    let mut options_done = false;
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if options_done || token == "-" || !token.starts_with('-') {
            positionals.push(token.clone());
            continue;
        }

        if token == "--" {
            options_done = true;
            continue;
        }

        if let Some(long) = token.strip_prefix("--") {
            resolve_long(long, &mut iter, &mut raw);
        } else {
            resolve_short_cluster(&token[1..], &mut iter, &mut raw);
        }
    }

    let mut positionals = positionals.into_iter();
    raw.command = positionals.next().unwrap_or_default();
    raw.url = positionals.next().ok_or(CurlParseError::MissingUrl)?;

    let extra: Vec<String> = positionals.collect();
    if !extra.is_empty() {
        log::debug!("ignoring extra positional arguments: {:?}", extra);
    }

    Ok(raw)
}

fn resolve_long<'a>(
    long: &str,
    iter: &mut impl Iterator<Item = &'a String>,
    raw: &mut RawArguments,
) {
    let (name, inline) = match long.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (long, None),
    };

    match find_long(name) {
        Some(spec) if spec.arity == Arity::Switch => {
            if inline.is_some() {
                log::debug!("ignoring value given to switch --{}", name);
            }
            raw.set_switch(spec.kind);
        }
        Some(spec) => match inline.or_else(|| iter.next().cloned()) {
            Some(value) => raw.set_value(spec.kind, value),
            None => log::debug!("flag --{} is missing its value", name),
        },
        None => {
            if inline.is_none() && FOREIGN_LONG_WITH_VALUE.contains(&name) {
                let skipped = iter.next();
                log::debug!("ignoring unsupported flag --{} {:?}", name, skipped);
            } else {
                log::debug!("ignoring unsupported flag --{}", name);
            }
        }
    }
}

/// Resolve `-k`, `-ksi`, `-XPOST` or `-X POST`.
fn resolve_short_cluster<'a>(
    cluster: &str,
    iter: &mut impl Iterator<Item = &'a String>,
    raw: &mut RawArguments,
) {
    for (pos, flag) in cluster.char_indices() {
        let attached = &cluster[pos + flag.len_utf8()..];

        match find_short(flag) {
            Some(spec) if spec.arity == Arity::Switch => raw.set_switch(spec.kind),
            Some(spec) => {
                let value = if attached.is_empty() {
                    iter.next().cloned()
                } else {
                    Some(attached.to_string())
                };
                match value {
                    Some(value) => raw.set_value(spec.kind, value),
                    None => log::debug!("flag -{} is missing its value", flag),
                }
                return;
            }
            None if FOREIGN_SHORT_WITH_VALUE.contains(&flag) => {
                if attached.is_empty() {
                    let skipped = iter.next();
                    log::debug!("ignoring unsupported flag -{} {:?}", flag, skipped);
                } else {
                    log::debug!("ignoring unsupported flag -{}{}", flag, attached);
                }
                return;
            }
            None => log::debug!("ignoring unsupported flag -{}", flag),
        }
    }
}
