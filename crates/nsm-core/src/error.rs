use thiserror::Error;

/// Errors produced by the null-safe primitives.
///
/// The primitives themselves never fail on absence; these variants exist for
/// callers that explicitly opt into treating absence as an error, and for the
/// configuration layer built on top of this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    /// A chain ended without a value. `step` is the index of the step that
    /// first produced absence (0 = the source).
    #[error("value was absent at step {step}")]
    Absent { step: usize },

    /// Mapper configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for mapper results.
pub type MapperResult<T> = Result<T, MapperError>;
