use crate::Identifier;
use crate::codec;
use crate::error::Result;
use std::fmt;

const SCHEMES: [&str; 2] = ["https", "http"];

/// Parsed representation of a short URL.
///
/// Format: `[<scheme>://]<segment>[<sep><segment>...]<sep><code>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedShortUrl {
    /// Lowercased scheme, if the URL carried `http://` or `https://`.
    pub scheme: Option<String>,
    /// Everything between the scheme and the code, usually the domain and
    /// an optional redirect segment.
    pub segments: Vec<String>,
    pub code: String,
    pub id: Identifier,
}

impl ParsedShortUrl {
    /// The first segment, which is the domain for assembled URLs.
    pub fn domain(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Formats this URL back into a string using `/` as the separator.
    pub fn to_url_string(&self) -> String {
        let mut result = String::new();
        if let Some(scheme) = &self.scheme {
            result.push_str(scheme);
            result.push_str("://");
        }
        for segment in &self.segments {
            result.push_str(segment);
            result.push('/');
        }
        result.push_str(&self.code);
        result
    }
}

impl fmt::Display for ParsedShortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_url_string())
    }
}

/// Splits a leading `http://` or `https://` (any case) off `url`.
pub fn strip_scheme(url: &str) -> (Option<&str>, &str) {
    for scheme in SCHEMES {
        let Some(head) = url.get(..scheme.len()) else {
            continue;
        };
        let rest = &url[scheme.len()..];
        if head.eq_ignore_ascii_case(scheme) {
            if let Some(rest) = rest.strip_prefix("://") {
                return (Some(scheme), rest);
            }
        }
    }
    (None, url)
}

/// Parses a short URL whose code follows the last `/`.
///
/// # Errors
///
/// Returns the codec's error if the trailing segment is empty, contains a
/// character outside the alphabet, or overflows.
pub fn parse_short_url(url: &str) -> Result<ParsedShortUrl> {
    parse_short_url_with(url, "/")
}

/// Parses a short URL whose code follows the last `separator`.
///
/// An empty separator treats everything after the scheme as the code.
///
/// # Errors
///
/// Same as [`parse_short_url`].
pub fn parse_short_url_with(url: &str, separator: &str) -> Result<ParsedShortUrl> {
    let (scheme, rest) = strip_scheme(url.trim());

    let mut segments: Vec<String> = if separator.is_empty() {
        vec![rest.to_string()]
    } else {
        rest.split(separator).map(str::to_string).collect()
    };
    let code = segments.pop().unwrap_or_default();
    let id = codec::decode(&code)?;

    Ok(ParsedShortUrl {
        scheme: scheme.map(str::to_string),
        segments,
        code,
        id,
    })
}

/// Extracts and decodes the code of a short URL.
///
/// # Errors
///
/// Same as [`parse_short_url`].
pub fn decode_short_url(url: &str) -> Result<Identifier> {
    parse_short_url(url).map(|parsed| parsed.id)
}
