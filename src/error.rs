#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortyError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code is empty")]
    EmptyCode,

    #[error("short code overflows a 64-bit identifier: {code}")]
    Overflow { code: String },

    #[error("no URL stored for identifier {id}")]
    NotFound { id: u64 },

    #[error("custom hash algorithm selected without a hash function")]
    MissingCustomHash,

    #[error("unknown hash algorithm: {name}")]
    UnknownAlgorithm { name: String },
}

pub type Result<T> = std::result::Result<T, ShortyError>;
