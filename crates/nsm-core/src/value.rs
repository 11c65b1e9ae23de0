//! The two single-step primitives: transform-if-present and assign-if-present.

/// Apply `transform` to `value` if it is present.
///
/// `transform` is never invoked on an absent value.
pub fn safe_value<A, B, F>(value: Option<A>, transform: F) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    value.and_then(transform)
}

/// Invoke `target` with `value` if it is present; otherwise do nothing.
pub fn assign<A, F>(target: F, value: Option<A>)
where
    F: FnOnce(A),
{
    if let Some(value) = value {
        target(value);
    }
}

/// Fallible form of [`safe_value`]. An `Err` from `transform` is returned
/// unchanged; absence is still `Ok(None)`.
pub fn try_safe_value<A, B, E, F>(value: Option<A>, transform: F) -> Result<Option<B>, E>
where
    F: FnOnce(A) -> Result<Option<B>, E>,
{
    match value {
        Some(value) => transform(value),
        None => Ok(None),
    }
}

/// Fallible form of [`assign`].
pub fn try_assign<A, E, F>(target: F, value: Option<A>) -> Result<(), E>
where
    F: FnOnce(A) -> Result<(), E>,
{
    match value {
        Some(value) => target(value),
        None => Ok(()),
    }
}
