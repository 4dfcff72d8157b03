/// Error enumeration for repository failures.
///
/// "Not found" is never an error here: lookups return `Ok(None)` (or an
/// empty list) for absent records. These variants signal that the store
/// itself misbehaved, and the domain services surface them uniformly as
/// SYSTEM_ERROR outcomes.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored record could not be decoded: {0}")]
    Codec(String),
}

/// Shorthand for repository method signatures.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
