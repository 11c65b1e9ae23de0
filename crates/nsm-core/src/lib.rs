//! Null-safe accessor chains.
//!
//! Extracts a value through a chain of accessors, or assigns it to a target,
//! without checking for absence at every level. Absence is always
//! `Option::None`: a transform or target is never invoked without a value,
//! and the first `None` anywhere in a chain short-circuits the rest.
//!
//! Failures raised by caller-supplied functions are not absence. Panics
//! unwind through the chain untouched, and the `try_*` variants return the
//! caller's `Err` unchanged.
//!
//! # Key Types
//!
//! - [`Chain`] -- Left-fold builder over accessor steps
//! - [`Resolved`] -- A finished chain plus the step where it went absent
//! - [`MapperError`] -- Opt-in error for absence and configuration failures
//!
//! # Quick Start
//!
//! ```rust
//! use nsm_core::{map1, safe_chain2};
//!
//! struct Department { name: Option<String> }
//! struct Employee { department: Option<Department> }
//!
//! let employee = Employee {
//!     department: Some(Department { name: Some("Developer".into()) }),
//! };
//!
//! let name = safe_chain2(
//!     || Some(&employee),
//!     |e| e.department.as_ref(),
//!     |d| d.name.as_deref(),
//! );
//! assert_eq!(name, Some("Developer"));
//!
//! let mut dto_department = None;
//! map1(|n| dto_department = Some(n), || employee.department.as_ref(), |d| d.name.clone());
//! assert_eq!(dto_department.as_deref(), Some("Developer"));
//! ```

pub mod chain;
pub mod error;
pub mod ops;
pub mod value;

pub use chain::{fold_steps, Chain, Resolved};
pub use error::{MapperError, MapperResult};
pub use ops::{
    map, map1, map2, map3, map4, safe_chain, safe_chain2, safe_chain3, safe_chain4,
    try_map1, try_safe_chain,
};
pub use value::{assign, safe_value, try_assign, try_safe_value};
