//! Shell-style word splitting for curl command lines
//!
//! Only quoting is understood: single and double quotes group whitespace and
//! are removed, `$'...'` strings have their escapes decoded. Backslashes
//! outside `$'...'` are dropped, which folds line continuations into plain
//! whitespace at the cost of literal backslashes in arguments.

use std::iter::Peekable;
use std::str::Chars;

use crate::config::COMMAND_VERB;
use crate::error::{CurlParseError, Result};
use crate::utils::StringUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Check the command verb and split the command into words.
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    check_command_verb(command)?;
    let words = split_words(command)?;
    log::trace!("tokenized command into {} words", words.len());
    Ok(words)
}

/// Fail unless the first whitespace-delimited word is the command verb.
pub fn check_command_verb(command: &str) -> Result<()> {
    let first = command.split_whitespace().next().unwrap_or_default();
    if first.replace('\\', "") == COMMAND_VERB {
        return Ok(());
    }

    Err(CurlParseError::MalformedCommand(format!(
        "expected the command to start with `{verb}`, found `{first}`. \
         Like \"{verb} https://example.com/\"",
        verb = COMMAND_VERB,
    )))
}

/// Split a string into words following POSIX-shell quoting.
pub fn split_words(input: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {}
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (Quote::None, '$') if chars.peek() == Some(&'\'') => {
                chars.next();
                current.push_str(&read_ansi_c_quoted(&mut chars)?);
                in_word = true;
            }
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (_, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err(CurlParseError::Tokenization(
            "No closing quotation".to_string(),
        ));
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Read the body of a `$'...'` string (opening quote already consumed).
fn read_ansi_c_quoted(chars: &mut Peekable<Chars<'_>>) -> Result<String> {
    let mut raw = String::new();

    loop {
        match chars.next() {
            Some('\'') => break,
            Some('\\') => {
                raw.push('\\');
                if let Some(escaped) = chars.next() {
                    raw.push(escaped);
                }
            }
            Some(c) => raw.push(c),
            None => {
                return Err(CurlParseError::Tokenization(
                    "No closing quotation in $'...' string".to_string(),
                ))
            }
        }
    }

    Ok(StringUtils::decode_escapes(&raw))
}
