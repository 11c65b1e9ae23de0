//! Fixed-arity entry points for the common chain lengths.
//!
//! Every function here is a thin wrapper over [`Chain`]; the numeric suffix
//! is the number of transforms applied after the source.

use crate::chain::Chain;
use crate::value::{assign, safe_value, try_assign, try_safe_value};

// ---------------------------------------------------------------------------
// Getters
// ---------------------------------------------------------------------------

/// Invoke `source` once and apply `transform` if it produced a value.
pub fn safe_chain<A, B, S, F>(source: S, transform: F) -> Option<B>
where
    S: FnOnce() -> Option<A>,
    F: FnOnce(A) -> Option<B>,
{
    safe_value(source(), transform)
}

/// `source().t1().t2()` with absence propagated.
pub fn safe_chain2<A, B, C, S, F1, F2>(source: S, t1: F1, t2: F2) -> Option<C>
where
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
{
    Chain::from_source(source).then(t1).then(t2).get()
}

/// `source().t1().t2().t3()` with absence propagated.
pub fn safe_chain3<A, B, C, D, S, F1, F2, F3>(source: S, t1: F1, t2: F2, t3: F3) -> Option<D>
where
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
    F3: FnOnce(C) -> Option<D>,
{
    Chain::from_source(source).then(t1).then(t2).then(t3).get()
}

/// `source().t1().t2().t3().t4()` with absence propagated.
pub fn safe_chain4<A, B, C, D, R, S, F1, F2, F3, F4>(
    source: S,
    t1: F1,
    t2: F2,
    t3: F3,
    t4: F4,
) -> Option<R>
where
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
    F3: FnOnce(C) -> Option<D>,
    F4: FnOnce(D) -> Option<R>,
{
    Chain::from_source(source)
        .then(t1)
        .then(t2)
        .then(t3)
        .then(t4)
        .get()
}

// ---------------------------------------------------------------------------
// Get-then-set
// ---------------------------------------------------------------------------

/// `target(source())` if the source produced a value.
pub fn map<A, T, S>(target: T, source: S)
where
    T: FnOnce(A),
    S: FnOnce() -> Option<A>,
{
    assign(target, source());
}

/// `target(source().t1())` if every step produced a value.
pub fn map1<A, B, T, S, F1>(target: T, source: S, t1: F1)
where
    T: FnOnce(B),
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
{
    assign(target, safe_chain(source, t1));
}

/// `target(source().t1().t2())` if every step produced a value.
pub fn map2<A, B, C, T, S, F1, F2>(target: T, source: S, t1: F1, t2: F2)
where
    T: FnOnce(C),
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
{
    Chain::from_source(source)
        .then(t1)
        .then(t2)
        .assign_to(target);
}

/// `target(source().t1().t2().t3())` if every step produced a value.
pub fn map3<A, B, C, D, T, S, F1, F2, F3>(target: T, source: S, t1: F1, t2: F2, t3: F3)
where
    T: FnOnce(D),
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
    F3: FnOnce(C) -> Option<D>,
{
    Chain::from_source(source)
        .then(t1)
        .then(t2)
        .then(t3)
        .assign_to(target);
}

/// `target(source().t1().t2().t3().t4())` if every step produced a value.
pub fn map4<A, B, C, D, R, T, S, F1, F2, F3, F4>(
    target: T,
    source: S,
    t1: F1,
    t2: F2,
    t3: F3,
    t4: F4,
) where
    T: FnOnce(R),
    S: FnOnce() -> Option<A>,
    F1: FnOnce(A) -> Option<B>,
    F2: FnOnce(B) -> Option<C>,
    F3: FnOnce(C) -> Option<D>,
    F4: FnOnce(D) -> Option<R>,
{
    Chain::from_source(source)
        .then(t1)
        .then(t2)
        .then(t3)
        .then(t4)
        .assign_to(target);
}

// ---------------------------------------------------------------------------
// Fallible
// ---------------------------------------------------------------------------

/// Fallible form of [`safe_chain`]. A failing source is returned as its
/// `Err`, never folded into absence.
pub fn try_safe_chain<A, B, E, S, F>(source: S, transform: F) -> Result<Option<B>, E>
where
    S: FnOnce() -> Result<Option<A>, E>,
    F: FnOnce(A) -> Result<Option<B>, E>,
{
    try_safe_value(source()?, transform)
}

/// Fallible form of [`map1`]. The first `Err` from any of the three
/// functions is returned unchanged.
pub fn try_map1<A, B, E, T, S, F1>(target: T, source: S, t1: F1) -> Result<(), E>
where
    T: FnOnce(B) -> Result<(), E>,
    S: FnOnce() -> Result<Option<A>, E>,
    F1: FnOnce(A) -> Result<Option<B>, E>,
{
    try_assign(target, try_safe_chain(source, t1)?)
}
