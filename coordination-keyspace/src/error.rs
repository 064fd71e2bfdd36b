use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The keyspace was given an unusable prefix at construction. Fatal:
    /// callers must not proceed with an unconfigured keyspace.
    #[error("invalid keyspace configuration: {0}")]
    InvalidConfig(String),

    /// An identifier failed the opt-in safety check in [`crate::util`].
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
