//! Utility functions and helpers

use crate::error::{CurlParseError, Result};
use crate::request::ParamValue;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use url::form_urlencoded;

/// URL splitting and query-string utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Split a URL at the first `?` into its base and query portions.
    ///
    /// The query stops at a `#` fragment marker. A URL without `?` is returned
    /// untouched with no query.
    pub fn split_query(url: &str) -> (&str, Option<&str>) {
        match url.split_once('?') {
            Some((base, rest)) => {
                let query = rest.split_once('#').map_or(rest, |(query, _)| query);
                (base, Some(query))
            }
            None => (url, None),
        }
    }

    /// Parse a query string into ordered parameters.
    ///
    /// Blank values are kept as empty strings. A key seen once maps to a
    /// single value, a repeated key to every value in appearance order.
    pub fn query_params(query: &str) -> IndexMap<String, ParamValue> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            grouped
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        grouped
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    ParamValue::Single(values.remove(0))
                } else {
                    ParamValue::Multiple(values)
                };
                (key, value)
            })
            .collect()
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = match path.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => return Ok(PathBuf::from(path)),
        };

        match dirs::home_dir() {
            Some(home_dir) if rest.is_empty() => Ok(home_dir),
            Some(home_dir) => Ok(home_dir.join(rest)),
            None => Err(CurlParseError::Config(
                "Cannot determine home directory".to_string(),
            )),
        }
    }

    /// Check if file exists and is readable
    pub fn check_file_readable(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CurlParseError::FileNotFound(format!(
                "File not found: {:?}",
                path
            )));
        }

        if !path.is_file() {
            return Err(CurlParseError::Config(format!(
                "Path is not a file: {:?}",
                path
            )));
        }

        std::fs::File::open(path).map_err(|e| {
            CurlParseError::PermissionDenied(format!("Cannot read file {:?}: {}", path, e))
        })?;

        Ok(())
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Split a raw header line into name and value.
    ///
    /// The split happens at the first colon, except for pseudo-headers whose
    /// name itself starts with `:` (`:authority: example.com`), which split at
    /// the second one. Returns `None` when there is no separating colon.
    pub fn split_header_line(line: &str) -> Option<(&str, &str)> {
        let separator = if let Some(rest) = line.strip_prefix(':') {
            rest.find(':').map(|pos| pos + 1)
        } else {
            line.find(':')
        }?;

        Some((&line[..separator], &line[separator + 1..]))
    }

    /// Decode backslash escape sequences into literal text.
    ///
    /// Understands the C-style single character escapes, `\xHH`, `\uHHHH`,
    /// `\UHHHHHHHH` and up to three octal digits. Unknown or truncated escapes
    /// are kept verbatim, backslash included.
    pub fn decode_escapes(input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c != '\\' || i + 1 == chars.len() {
                out.push(c);
                i += 1;
                continue;
            }

            let escape = chars[i + 1];
            if let Some(decoded) = simple_escape(escape) {
                out.push(decoded);
                i += 2;
                continue;
            }

            match numeric_escape(&chars, i) {
                Some((decoded, next)) => {
                    out.push(decoded);
                    i = next;
                }
                None => {
                    out.push('\\');
                    i += 1;
                }
            }
        }

        out
    }
}

fn simple_escape(escape: char) -> Option<char> {
    let decoded = match escape {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0c}',
        'v' => '\u{0b}',
        'e' | 'E' => '\u{1b}',
        '\\' | '\'' | '"' | '?' => escape,
        _ => return None,
    };
    Some(decoded)
}

/// Decode a numeric escape starting at the backslash at `start`.
///
/// Returns the decoded character and the index just past the escape.
fn numeric_escape(chars: &[char], start: usize) -> Option<(char, usize)> {
    let escape = chars[start + 1];
    let (radix, min, max, digits_from) = match escape {
        'x' => (16, 1, 2, start + 2),
        'u' => (16, 4, 4, start + 2),
        'U' => (16, 8, 8, start + 2),
        '0'..='7' => (8, 1, 3, start + 1),
        _ => return None,
    };

    let (code, mut end) = read_digits(chars, digits_from, radix, min, max)?;

    // A high surrogate followed by `\uDC00`-`\uDFFF` encodes one code point.
    let code = if escape == 'u' && (0xD800..0xDC00).contains(&code) {
        match low_surrogate(chars, end) {
            Some(low) => {
                end += 6;
                0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
            }
            None => code,
        }
    } else {
        code
    };

    char::from_u32(code).map(|decoded| (decoded, end))
}

fn low_surrogate(chars: &[char], at: usize) -> Option<u32> {
    if chars.get(at) != Some(&'\\') || chars.get(at + 1) != Some(&'u') {
        return None;
    }
    let (low, _) = read_digits(chars, at + 2, 16, 4, 4)?;
    (0xDC00..0xE000).contains(&low).then_some(low)
}

fn read_digits(
    chars: &[char],
    from: usize,
    radix: u32,
    min: usize,
    max: usize,
) -> Option<(u32, usize)> {
    let digits: String = chars
        .get(from..)?
        .iter()
        .take(max)
        .take_while(|c| c.is_digit(radix))
        .collect();

    if digits.len() < min {
        return None;
    }

    let value = u32::from_str_radix(&digits, radix).ok()?;
    Some((value, from + digits.len()))
}
