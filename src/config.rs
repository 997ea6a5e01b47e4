use serde::{Deserialize, Serialize};

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_REDIRECT_PATH_SEGMENT: &str = "r";
const DEFAULT_PATH_SEPARATOR: &str = "/";

/// How short URLs are assembled around a short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlConfig {
    pub domain: String,
    #[serde(default = "default_true")]
    pub include_protocol: bool,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default)]
    pub include_redirect_path: bool,
    #[serde(default = "default_redirect_path_segment")]
    pub redirect_path_segment: String,
    #[serde(default = "default_path_separator")]
    pub path_separator: String,
}

const fn default_true() -> bool {
    true
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

fn default_redirect_path_segment() -> String {
    DEFAULT_REDIRECT_PATH_SEGMENT.to_string()
}

fn default_path_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_string()
}

impl UrlConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            include_protocol: true,
            protocol: default_protocol(),
            include_redirect_path: false,
            redirect_path_segment: default_redirect_path_segment(),
            path_separator: default_path_separator(),
        }
    }

    #[must_use]
    pub const fn include_protocol(mut self, include: bool) -> Self {
        self.include_protocol = include;
        self
    }

    #[must_use]
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    #[must_use]
    pub const fn include_redirect_path(mut self, include: bool) -> Self {
        self.include_redirect_path = include;
        self
    }

    #[must_use]
    pub fn redirect_path_segment(mut self, segment: impl Into<String>) -> Self {
        self.redirect_path_segment = segment.into();
        self
    }

    #[must_use]
    pub fn path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Apply every field set in `overrides`, keeping the rest.
    #[must_use]
    pub fn with_overrides(mut self, overrides: UrlConfigOverrides) -> Self {
        if let Some(domain) = overrides.domain {
            self.domain = domain;
        }
        if let Some(include) = overrides.include_protocol {
            self.include_protocol = include;
        }
        if let Some(protocol) = overrides.protocol {
            self.protocol = protocol;
        }
        if let Some(include) = overrides.include_redirect_path {
            self.include_redirect_path = include;
        }
        if let Some(segment) = overrides.redirect_path_segment {
            self.redirect_path_segment = segment;
        }
        if let Some(separator) = overrides.path_separator {
            self.path_separator = separator;
        }
        self
    }

    /// Assemble the short URL for `code`:
    /// `[protocol://]domain[<sep>segment]<sep>code`.
    pub fn assemble(&self, code: &str) -> String {
        let mut url = String::new();
        if self.include_protocol {
            url.push_str(&self.protocol);
            url.push_str("://");
        }
        url.push_str(&self.domain);
        if self.include_redirect_path {
            url.push_str(&self.path_separator);
            url.push_str(&self.redirect_path_segment);
        }
        url.push_str(&self.path_separator);
        url.push_str(code);
        url
    }
}

/// Partial configuration, typically deserialized from user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlConfigOverrides {
    pub domain: Option<String>,
    pub include_protocol: Option<bool>,
    pub protocol: Option<String>,
    pub include_redirect_path: Option<bool>,
    pub redirect_path_segment: Option<String>,
    pub path_separator: Option<String>,
}
