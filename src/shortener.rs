use crate::codec;
use crate::config::UrlConfig;
use crate::error::{Result, ShortyError};
use crate::hash::UrlHasher;
use crate::parse::{parse_short_url, parse_short_url_with, ParsedShortUrl};
use crate::store::{MemoryStore, UrlStore};

/// Creates and resolves short URLs.
///
/// The long URL is hashed to an identifier, stored under it, and the
/// identifier's base62 code is appended to the configured domain. The same
/// long URL always yields the same code; colliding URLs overwrite each other.
#[derive(Debug)]
pub struct Shortener<S = MemoryStore> {
    hasher: UrlHasher,
    store: S,
}

impl Shortener<MemoryStore> {
    /// DJB2 hashing over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(UrlHasher::default(), MemoryStore::new())
    }
}

impl Default for Shortener<MemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: UrlStore> Shortener<S> {
    pub const fn new(hasher: UrlHasher, store: S) -> Self {
        Self { hasher, store }
    }

    pub const fn hasher(&self) -> &UrlHasher {
        &self.hasher
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The short code `long_url` maps to, without storing anything.
    pub fn code_for(&self, long_url: &str) -> String {
        codec::encode(self.hasher.hash(long_url))
    }

    /// Store `long_url` and return its short URL assembled per `config`.
    pub fn shorten(&self, long_url: &str, config: &UrlConfig) -> String {
        let id = self.hasher.hash(long_url);
        let code = codec::encode(id);
        self.store.put(id, long_url.to_string());
        let short_url = config.assemble(&code);
        tracing::debug!(id, code = %code, short_url = %short_url, "shortened URL");
        short_url
    }

    /// Shorten with the default configuration for `domain`.
    pub fn shorten_to_domain(&self, long_url: &str, domain: &str) -> String {
        self.shorten(long_url, &UrlConfig::new(domain))
    }

    /// Resolve a short URL whose code follows the last `/`.
    ///
    /// Malformed codes and unknown identifiers both yield `None`.
    pub fn resolve(&self, short_url: &str) -> Option<String> {
        self.log_miss(short_url, self.try_resolve(short_url))
    }

    /// Resolve a short URL assembled with `config`'s path separator.
    pub fn resolve_with(&self, short_url: &str, config: &UrlConfig) -> Option<String> {
        let result = parse_short_url_with(short_url, &config.path_separator)
            .and_then(|parsed| self.lookup(&parsed));
        self.log_miss(short_url, result)
    }

    /// Like [`Shortener::resolve`] but keeps the reason for a miss.
    ///
    /// # Errors
    ///
    /// Returns the codec's error for a malformed code, or `NotFound` if no
    /// URL is stored under the decoded identifier.
    pub fn try_resolve(&self, short_url: &str) -> Result<String> {
        let parsed = parse_short_url(short_url)?;
        self.lookup(&parsed)
    }

    fn lookup(&self, parsed: &ParsedShortUrl) -> Result<String> {
        self.store
            .get(parsed.id)
            .ok_or(ShortyError::NotFound { id: parsed.id })
    }

    #[allow(clippy::unused_self)]
    fn log_miss(&self, short_url: &str, result: Result<String>) -> Option<String> {
        match result {
            Ok(url) => Some(url),
            Err(error) => {
                tracing::debug!(short_url, %error, "short URL did not resolve");
                None
            }
        }
    }
}
