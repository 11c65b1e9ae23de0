use nsm_core::{MapperError, MapperResult};
use serde::{Deserialize, Serialize};

/// Configuration for a [`NullSafeMapper`](crate::NullSafeMapper).
///
/// Only affects what gets logged; results are identical for every
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Label attached to every event this mapper emits.
    pub name: String,
    /// Emit a `debug` event when a chain ends absent, naming the step.
    pub trace_absence: bool,
    /// Emit a `trace` event each time a target is invoked.
    pub trace_assign: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            name: "mapper".into(),
            trace_absence: true,
            trace_assign: false,
        }
    }
}

impl MapperConfig {
    /// A configuration that emits no events at all.
    pub fn quiet() -> Self {
        Self {
            trace_absence: false,
            trace_assign: false,
            ..Default::default()
        }
    }

    /// Builder-style label override.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> MapperResult<Self> {
        toml::from_str(text).map_err(|e| MapperError::Config(e.to_string()))
    }
}
