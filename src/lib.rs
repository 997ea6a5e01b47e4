pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod parse;
pub mod shortener;
pub mod store;

pub use error::{ShortyError, Result};
pub use codec::{ALPHABET, decode, encode, is_valid_code};
pub use config::{UrlConfig, UrlConfigOverrides};
pub use hash::{Djb2, HashAlgorithm, HashFunction, Sdbm, UrlHasher};
pub use parse::{ParsedShortUrl, decode_short_url, parse_short_url, parse_short_url_with};
pub use shortener::Shortener;
pub use store::{MemoryStore, UrlStore};

/// Non-negative key a long URL is stored under.
pub type Identifier = u64;

/// DJB2 hash of `input`, normalized to a non-negative identifier.
pub fn hash(input: &str) -> Identifier {
    hash::hash(input)
}
