//! Interpretation of raw arguments into a [`ParsedRequest`]

use cookie::Cookie;
use indexmap::IndexMap;

use crate::config::{MethodMode, ParserConfig};
use crate::error::{CurlParseError, Result};
use crate::parser::flags::RawArguments;
use crate::request::{Credentials, Method, ParsedRequest, Proxy};
use crate::utils::{StringUtils, UrlUtils};

/// Build the final request from resolved arguments.
pub fn build(raw: RawArguments, config: &ParserConfig) -> Result<ParsedRequest> {
    let method = resolve_method(&raw, config.method_mode)?;
    let (cookies, headers) = split_cookies_and_headers(&raw.headers);
    let proxy = build_proxy(raw.proxy.as_deref(), raw.user.as_deref());
    let user = raw
        .user
        .as_deref()
        .filter(|user| !user.is_empty())
        .map(Credentials::parse);

    let (url, query) = UrlUtils::split_query(&raw.url);
    let params = query.map(UrlUtils::query_params).unwrap_or_default();

    Ok(ParsedRequest {
        method,
        url: url.to_string(),
        params,
        data: raw.data,
        data_binary: raw.data_binary,
        headers,
        cookies,
        insecure: raw.insecure,
        user,
        proxy,
        compressed: raw.compressed,
        include: raw.include,
        silent: raw.silent,
    })
}

/// Pick the method: binary data, then `-X`, then GET.
///
/// In permissive mode an explicit `-X` takes precedence over binary data and
/// any uppercased method is accepted; strict mode rejects unknown verbs.
pub fn resolve_method(raw: &RawArguments, mode: MethodMode) -> Result<Method> {
    let explicit = raw.method.as_deref().map(str::to_uppercase);
    let has_binary = raw.data_binary.as_deref().is_some_and(|d| !d.is_empty());

    let resolved = match (explicit, mode) {
        (Some(method), MethodMode::Permissive) => method,
        (_, MethodMode::Strict) if has_binary => return Ok(Method::Post),
        (Some(method), MethodMode::Strict) => method,
        (None, _) if has_binary => return Ok(Method::Post),
        (None, _) => return Ok(Method::Get),
    };

    let method = resolved
        .parse::<Method>()
        .unwrap_or_else(|()| Method::Other(resolved));
    if mode == MethodMode::Strict && !method.is_known() {
        return Err(CurlParseError::UnsupportedMethod(method.to_string()));
    }

    Ok(method)
}

/// Whether a header name carries cookies (`Cookie`, `cookie`, `$Cookie`, ...)
pub fn is_cookie_header(name: &str) -> bool {
    name.trim_start_matches('$').eq_ignore_ascii_case("cookie")
}

/// Separate cookie header lines from ordinary headers.
///
/// Returns `(cookies, headers)`, both in command-line order. Lines without a
/// name/value separator are dropped.
pub fn split_cookies_and_headers(
    lines: &[String],
) -> (IndexMap<String, String>, IndexMap<String, String>) {
    let mut cookies = IndexMap::new();
    let mut headers = IndexMap::new();

    for line in lines {
        let Some((name, value)) = StringUtils::split_header_line(line) else {
            log::debug!("dropping header line without a colon: {:?}", line);
            continue;
        };

        if is_cookie_header(name) {
            for (cookie_name, cookie_value) in parse_cookie_pairs(value) {
                cookies.insert(cookie_name, cookie_value);
            }
        } else {
            headers.insert(name.to_string(), value.trim().to_string());
        }
    }

    (cookies, headers)
}

/// Split a cookie header value into pairs.
///
/// Escapes were already decoded by the tokenizer (backslashes only survive
/// inside `$'...'`), so the value is taken literally here.
pub fn parse_cookie_pairs(value: &str) -> Vec<(String, String)> {
    Cookie::split_parse(value)
        .filter_map(|parsed| match parsed {
            Ok(cookie) => Some((cookie.name().to_string(), cookie.value_trimmed().to_string())),
            Err(err) => {
                log::debug!("skipping cookie pair in {:?}: {}", value, err);
                None
            }
        })
        .collect()
}

/// Derive the proxy setting from `-x` and `-U`.
///
/// Without credentials the proxy string passes through untouched; with them
/// each scheme gets a URL embedding the raw `user:password` string.
pub fn build_proxy(proxy: Option<&str>, user: Option<&str>) -> Option<Proxy> {
    let proxy = proxy.filter(|p| !p.is_empty())?;

    match user.filter(|u| !u.is_empty()) {
        Some(user) => Some(Proxy::with_credentials(proxy, user)),
        None => Some(Proxy::Bare(proxy.to_string())),
    }
}
