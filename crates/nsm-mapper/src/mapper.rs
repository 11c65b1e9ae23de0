use nsm_core::Chain;
use tracing::{debug, trace};

use crate::config::MapperConfig;

// ---------------------------------------------------------------------------
// NullSafeMapper
// ---------------------------------------------------------------------------

/// Get/set mapper over null-safe accessor chains.
///
/// Holds no state beyond its configuration, so one instance can be shared
/// freely across threads and call sites. Every method behaves exactly like
/// the matching free function in `nsm_core`; the mapper only adds
/// structured events according to its [`MapperConfig`].
///
/// ```rust
/// use nsm_mapper::{MapperConfig, NullSafeMapper};
///
/// struct Department { name: Option<String> }
/// struct Employee { name: Option<String>, department: Option<Department> }
///
/// #[derive(Default)]
/// struct EmployeeDto { name: Option<String>, department: Option<String> }
///
/// let mapper = NullSafeMapper::new(MapperConfig::default().named("employee-dto"));
/// let entity = Employee { name: Some("Eugenio".into()), department: None };
/// let mut dto = EmployeeDto::default();
///
/// mapper.map(|v| dto.name = Some(v), || entity.name.clone());
/// mapper.map1(|v| dto.department = Some(v), || entity.department.as_ref(), |d| d.name.clone());
///
/// assert_eq!(dto.name.as_deref(), Some("Eugenio"));
/// assert_eq!(dto.department, None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NullSafeMapper {
    config: MapperConfig,
}

impl NullSafeMapper {
    /// Create a mapper with the given configuration.
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    // -- getters ------------------------------------------------------------

    /// Apply `transform` to `value` if present.
    pub fn safe_value<A, B, F>(&self, value: Option<A>, transform: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.resolve(Chain::of(value).then(transform))
    }

    /// Invoke `source` once and apply `transform` if it produced a value.
    pub fn safe_chain<A, B, S, F>(&self, source: S, transform: F) -> Option<B>
    where
        S: FnOnce() -> Option<A>,
        F: FnOnce(A) -> Option<B>,
    {
        self.resolve(Chain::from_source(source).then(transform))
    }

    pub fn safe_chain2<A, B, C, S, F1, F2>(&self, source: S, t1: F1, t2: F2) -> Option<C>
    where
        S: FnOnce() -> Option<A>,
        F1: FnOnce(A) -> Option<B>,
        F2: FnOnce(B) -> Option<C>,
    {
        self.resolve(Chain::from_source(source).then(t1).then(t2))
    }

    pub fn safe_chain3<A, B, C, D, S, F1, F2, F3>(
        &self,
        source: S,
        t1: F1,
        t2: F2,
        t3: F3,
    ) -> Option<D>
    where
        S: FnOnce() -> Option<A>,
        F1: FnOnce(A) -> Option<B>,
        F2: FnOnce(B) -> Option<C>,
        F3: FnOnce(C) -> Option<D>,
    {
        self.resolve(Chain::from_source(source).then(t1).then(t2).then(t3))
    }

    pub fn safe_chain4<A, B, C, D, R, S, F1, F2, F3, F4>(
        &self,
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
        self.resolve(
            Chain::from_source(source)
                .then(t1)
                .then(t2)
                .then(t3)
                .then(t4),
        )
    }

    // -- setters ------------------------------------------------------------

    /// Invoke `target` with `value` if present.
    pub fn assign<A, T>(&self, target: T, value: Option<A>)
    where
        T: FnOnce(A),
    {
        self.deliver(Chain::of(value), target);
    }

    /// `target(source())` if the source produced a value.
    pub fn map<A, T, S>(&self, target: T, source: S)
    where
        T: FnOnce(A),
        S: FnOnce() -> Option<A>,
    {
        self.deliver(Chain::from_source(source), target);
    }

    pub fn map1<A, B, T, S, F1>(&self, target: T, source: S, t1: F1)
    where
        T: FnOnce(B),
        S: FnOnce() -> Option<A>,
        F1: FnOnce(A) -> Option<B>,
    {
        self.deliver(Chain::from_source(source).then(t1), target);
    }

    pub fn map2<A, B, C, T, S, F1, F2>(&self, target: T, source: S, t1: F1, t2: F2)
    where
        T: FnOnce(C),
        S: FnOnce() -> Option<A>,
        F1: FnOnce(A) -> Option<B>,
        F2: FnOnce(B) -> Option<C>,
    {
        self.deliver(Chain::from_source(source).then(t1).then(t2), target);
    }

    pub fn map3<A, B, C, D, T, S, F1, F2, F3>(&self, target: T, source: S, t1: F1, t2: F2, t3: F3)
    where
        T: FnOnce(D),
        S: FnOnce() -> Option<A>,
        F1: FnOnce(A) -> Option<B>,
        F2: FnOnce(B) -> Option<C>,
        F3: FnOnce(C) -> Option<D>,
    {
        self.deliver(
            Chain::from_source(source).then(t1).then(t2).then(t3),
            target,
        );
    }

    pub fn map4<A, B, C, D, R, T, S, F1, F2, F3, F4>(
        &self,
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
        self.deliver(
            Chain::from_source(source)
                .then(t1)
                .then(t2)
                .then(t3)
                .then(t4),
            target,
        );
    }

    // -- fallible -----------------------------------------------------------

    /// Fallible form of [`safe_chain`](Self::safe_chain). Errors from either
    /// function are returned unchanged and never logged as absence.
    pub fn try_safe_chain<A, B, E, S, F>(&self, source: S, transform: F) -> Result<Option<B>, E>
    where
        S: FnOnce() -> Result<Option<A>, E>,
        F: FnOnce(A) -> Result<Option<B>, E>,
    {
        let chain = Chain::of(source()?).try_then(transform)?;
        Ok(self.resolve(chain))
    }

    /// Fallible form of [`map1`](Self::map1).
    pub fn try_map1<A, B, E, T, S, F1>(&self, target: T, source: S, t1: F1) -> Result<(), E>
    where
        T: FnOnce(B) -> Result<(), E>,
        S: FnOnce() -> Result<Option<A>, E>,
        F1: FnOnce(A) -> Result<Option<B>, E>,
    {
        let chain = Chain::of(source()?).try_then(t1)?;
        match self.resolve(chain) {
            Some(value) => {
                self.note_assign();
                target(value)
            }
            None => Ok(()),
        }
    }

    // -- arbitrary chains ---------------------------------------------------

    /// Finish a caller-built chain of any length.
    pub fn resolve<T>(&self, chain: Chain<T>) -> Option<T> {
        let resolved = chain.resolve();
        if self.config.trace_absence {
            if let Some(step) = resolved.absent_at {
                debug!(
                    mapper = %self.config.name,
                    step,
                    depth = resolved.depth,
                    "chain short-circuited on absent value"
                );
            }
        }
        resolved.value
    }

    /// Finish a caller-built chain and hand its value to `target` if present.
    pub fn deliver<T, F>(&self, chain: Chain<T>, target: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.resolve(chain) {
            self.note_assign();
            target(value);
        }
    }

    fn note_assign(&self) {
        if self.config.trace_assign {
            trace!(mapper = %self.config.name, "target assigned");
        }
    }
}
