//! Left-fold over accessor steps with short-circuit on the first absence.

use crate::error::{MapperError, MapperResult};
use crate::value::assign;

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// An accessor chain in progress.
///
/// A chain starts from a source value (step 0) and grows one step per
/// [`then`](Self::then). Each step runs only while the current value is
/// present; after the first absence every further step is skipped, so
/// `a.x().y().z()` reads left to right without intermediate null checks.
///
/// ```rust
/// use nsm_core::Chain;
///
/// let port = Chain::of(Some("config/server/8080"))
///     .then(|p| p.rsplit('/').next())
///     .then(|s| s.parse::<u16>().ok())
///     .get();
/// assert_eq!(port, Some(8080));
///
/// let missing = Chain::of(Some("config/server"))
///     .then(|p| p.rsplit('/').next())
///     .then(|s| s.parse::<u16>().ok())
///     .get();
/// assert_eq!(missing, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain<T> {
    value: Option<T>,
    depth: usize,
    absent_at: Option<usize>,
}

impl<T> Chain<T> {
    /// Start a chain from an already obtained value.
    pub fn of(value: Option<T>) -> Self {
        let absent_at = if value.is_none() { Some(0) } else { None };
        Self {
            value,
            depth: 0,
            absent_at,
        }
    }

    /// Start a chain by invoking `source` exactly once.
    pub fn from_source<S>(source: S) -> Self
    where
        S: FnOnce() -> Option<T>,
    {
        Self::of(source())
    }

    /// Extend the chain with `transform`, applied only if a value is present.
    pub fn then<U, F>(self, transform: F) -> Chain<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        let depth = self.depth + 1;
        match self.value {
            Some(value) => Chain::step(transform(value), depth),
            None => Chain {
                value: None,
                depth,
                absent_at: self.absent_at,
            },
        }
    }

    /// Fallible form of [`then`](Self::then). The first `Err` aborts the
    /// chain and is returned unchanged.
    pub fn try_then<U, E, F>(self, transform: F) -> Result<Chain<U>, E>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
    {
        let depth = self.depth + 1;
        match self.value {
            Some(value) => Ok(Chain::step(transform(value)?, depth)),
            None => Ok(Chain {
                value: None,
                depth,
                absent_at: self.absent_at,
            }),
        }
    }

    /// Apply a sequence of same-typed steps in order.
    ///
    /// Steps are pulled from the iterator lazily; once the value is absent no
    /// further step is pulled or invoked.
    pub fn then_all<I, F>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Option<T>,
    {
        let mut steps = steps.into_iter();
        while self.value.is_some() {
            match steps.next() {
                Some(step) => self = self.then(step),
                None => break,
            }
        }
        self
    }

    fn step(value: Option<T>, depth: usize) -> Self {
        let absent_at = if value.is_none() { Some(depth) } else { None };
        Self {
            value,
            depth,
            absent_at,
        }
    }

    /// Returns `true` if the chain currently holds a value.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Number of steps appended after the source.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The final value, or `None` if any step produced absence.
    pub fn get(self) -> Option<T> {
        self.value
    }

    /// Hand the final value to `target` if present.
    pub fn assign_to<F>(self, target: F)
    where
        F: FnOnce(T),
    {
        assign(target, self.value);
    }

    /// Finish the chain, keeping the position of the first absence.
    pub fn resolve(self) -> Resolved<T> {
        Resolved {
            value: self.value,
            depth: self.depth,
            absent_at: self.absent_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved
// ---------------------------------------------------------------------------

/// A finished chain together with where it short-circuited.
///
/// `absent_at` is `None` exactly when `value` is `Some`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The final value.
    pub value: Option<T>,
    /// Number of steps appended after the source.
    pub depth: usize,
    /// Index of the step that first produced absence (0 = source).
    pub absent_at: Option<usize>,
}

impl<T> Resolved<T> {
    /// Returns `true` if the chain produced a value.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Discard the diagnostics.
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Treat absence as an error, reporting the step that produced it.
    pub fn require(self) -> MapperResult<T> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(MapperError::Absent {
                step: self.absent_at.unwrap_or(0),
            }),
        }
    }
}

/// Left-fold `value` through same-typed `steps`, stopping at the first absence.
///
/// Useful when the chain length is only known at runtime, e.g. walking parent
/// links a fixed number of times.
pub fn fold_steps<T, I, F>(value: Option<T>, steps: I) -> Option<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Option<T>,
{
    Chain::of(value).then_all(steps).get()
}
