//! The backend registry.
//!
//! A [`Registry`] is an explicit value built once at process start from
//! the compiled-in capability descriptors of the enabled backend crates
//! (see the facade's `builtin_registry()`), then passed by reference to
//! the lifecycle operations. There is no implicit global and no dynamic
//! registration after startup.

use tracing::debug;

use crate::caps::RigCaps;
use crate::error::{Result, RigError};
use crate::types::RigModel;

/// Immutable-after-startup collection of capability descriptors.
///
/// Lookup is a linear scan in registration order. If two descriptors
/// share a model identifier (a configuration mistake, not a failure),
/// the first registered wins.
#[derive(Debug, Default)]
pub struct Registry {
    caps: Vec<&'static RigCaps>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry { caps: Vec::new() }
    }

    /// Append a descriptor.
    ///
    /// Duplicate model identifiers are accepted; [`lookup`](Self::lookup)
    /// resolves them first-registered-wins.
    pub fn register(&mut self, caps: &'static RigCaps) {
        self.caps.push(caps);
    }

    /// Find the first descriptor whose model identifier matches.
    pub fn lookup(&self, model: RigModel) -> Option<&'static RigCaps> {
        self.caps.iter().copied().find(|c| c.model == model)
    }

    /// [`lookup`](Self::lookup) as a fallible operation, with diagnostics.
    ///
    /// Logs the resolved model name and serial rate range at debug level;
    /// an unknown model fails with
    /// [`RigError::ModelNotFound`].
    pub fn get_caps(&self, model: RigModel) -> Result<&'static RigCaps> {
        match self.lookup(model) {
            Some(caps) => {
                debug!(
                    model = model.0,
                    name = caps.model_name,
                    serial_rate_min = caps.serial_rate_min,
                    serial_rate_max = caps.serial_rate_max,
                    "resolved rig capabilities"
                );
                Ok(caps)
            }
            None => Err(RigError::ModelNotFound),
        }
    }

    /// Iterate over all descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static RigCaps> + '_ {
        self.caps.iter().copied()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    /// Whether no descriptors are registered.
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}
