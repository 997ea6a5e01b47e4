use std::fmt;
use std::str::FromStr;

use crate::Identifier;
use crate::error::{Result, ShortyError};

const DJB2_SEED: i32 = 5381;
const SDBM_SEED: i32 = 0;

/// A string hashing strategy producing a 32-bit signed value.
///
/// Any `Fn(&str) -> i32` closure that is `Send + Sync` is a `HashFunction`.
pub trait HashFunction: Send + Sync {
    fn compute_hash(&self, input: &str) -> i32;
}

impl<F> HashFunction for F
where
    F: Fn(&str) -> i32 + Send + Sync,
{
    fn compute_hash(&self, input: &str) -> i32 {
        self(input)
    }
}

/// Bernstein's `hash * 33 + c`, seeded with 5381.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djb2;

impl HashFunction for Djb2 {
    fn compute_hash(&self, input: &str) -> i32 {
        input.encode_utf16().fold(DJB2_SEED, |hash, unit| {
            hash.wrapping_mul(33).wrapping_add(i32::from(unit))
        })
    }
}

/// `c + (hash << 6) + (hash << 16) - hash`, seeded with 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sdbm;

impl HashFunction for Sdbm {
    fn compute_hash(&self, input: &str) -> i32 {
        input.encode_utf16().fold(SDBM_SEED, |hash, unit| {
            i32::from(unit)
                .wrapping_add(hash << 6)
                .wrapping_add(hash << 16)
                .wrapping_sub(hash)
        })
    }
}

/// Named hash algorithm, as selected from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Djb2,
    Sdbm,
    Custom,
}

impl FromStr for HashAlgorithm {
    type Err = ShortyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "djb2" => Ok(Self::Djb2),
            "sdbm" => Ok(Self::Sdbm),
            "custom" => Ok(Self::Custom),
            _ => Err(ShortyError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Djb2 => "djb2",
            Self::Sdbm => "sdbm",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Turns strings into identifiers with a pluggable [`HashFunction`].
pub struct UrlHasher {
    algorithm: HashAlgorithm,
    function: Box<dyn HashFunction>,
}

impl UrlHasher {
    /// Create a hasher backed by a custom strategy.
    pub fn new(function: impl HashFunction + 'static) -> Self {
        Self {
            algorithm: HashAlgorithm::Custom,
            function: Box::new(function),
        }
    }

    #[must_use]
    pub fn djb2() -> Self {
        Self {
            algorithm: HashAlgorithm::Djb2,
            function: Box::new(Djb2),
        }
    }

    #[must_use]
    pub fn sdbm() -> Self {
        Self {
            algorithm: HashAlgorithm::Sdbm,
            function: Box::new(Sdbm),
        }
    }

    /// Build a hasher from an algorithm name and an optional custom function.
    ///
    /// The custom function is ignored for the built-in algorithms.
    ///
    /// # Errors
    ///
    /// Returns `MissingCustomHash` if `algorithm` is `Custom` and no function
    /// was supplied.
    pub fn from_algorithm(
        algorithm: HashAlgorithm,
        custom: Option<Box<dyn HashFunction>>,
    ) -> Result<Self> {
        match algorithm {
            HashAlgorithm::Djb2 => Ok(Self::djb2()),
            HashAlgorithm::Sdbm => Ok(Self::sdbm()),
            HashAlgorithm::Custom => {
                let function = custom.ok_or(ShortyError::MissingCustomHash)?;
                Ok(Self {
                    algorithm,
                    function,
                })
            }
        }
    }

    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The signed 32-bit value before normalization.
    pub fn raw_hash(&self, input: &str) -> i32 {
        self.function.compute_hash(input)
    }

    /// Hash `input` and normalize it to a non-negative identifier.
    pub fn hash(&self, input: &str) -> Identifier {
        normalize(self.raw_hash(input))
    }
}

impl Default for UrlHasher {
    fn default() -> Self {
        Self::djb2()
    }
}

impl fmt::Debug for UrlHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlHasher")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Absolute value of a 32-bit hash, widened so `i32::MIN` maps to 2^31.
pub fn normalize(hash: i32) -> Identifier {
    Identifier::from(hash.unsigned_abs())
}

/// Hash `input` with DJB2 and normalize it.
pub fn hash(input: &str) -> Identifier {
    normalize(Djb2.compute_hash(input))
}
