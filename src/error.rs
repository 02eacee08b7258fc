use thiserror::Error;

/// Errors related to geometric computations.
///
/// Almost every operation in this crate is a total function; the only
/// fallible ones are those that cannot produce a meaningful result for a
/// zero-length vector.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
