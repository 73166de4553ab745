//! # rigkit -- generic rig control for heterogeneous transceivers
//!
//! `rigkit` lets host software control radio transceivers from different
//! device families through one synchronous API. Each family's wire
//! protocol lives in an independent backend crate; the core knows no
//! protocol detail.
//!
//! ## Quick Start
//!
//! ```
//! use rigkit::{Rig, Mode};
//! use rigkit_test_harness::MockConnector;
//!
//! # fn main() -> rigkit::Result<()> {
//! let registry = rigkit::builtin_registry();
//! let mut rig = Rig::new(&registry, rigkit::dummy::DUMMY_MODEL)?;
//! rig.open(&MockConnector::new())?;
//!
//! rig.set_freq(14_074_000)?;
//! rig.set_mode(Mode::USB)?;
//! println!("tuned to {} Hz", rig.get_freq()?);
//!
//! rig.close()?;
//! rig.cleanup()?;
//! # Ok(())
//! # }
//! ```
//!
//! Against real hardware, replace the mock with
//! [`rigkit_transport::SerialConnector`] and set `rig.state.port_path`.
//!
//! ## Architecture
//!
//! | Crate                 | Purpose                                      |
//! |-----------------------|----------------------------------------------|
//! | `rigkit-core`         | Registry, lifecycle, dispatch, error space   |
//! | `rigkit-transport`    | Serial transport implementation              |
//! | `rigkit-dummy`        | Loopback demo backend (no hardware)          |
//! | `rigkit-test-harness` | Mock transport/connector for tests           |
//! | **`rigkit`**          | This facade crate -- re-exports everything   |
//!
//! ## Feature Flags
//!
//! Each backend is gated behind a feature flag; `dummy` is enabled by
//! default. [`builtin_registry`] registers only the enabled backends.

pub use rigkit_core::*;

pub use rigkit_transport::{SerialConnector, SerialTransport};

/// The loopback demo backend.
#[cfg(feature = "dummy")]
pub mod dummy {
    pub use rigkit_dummy::*;
}

/// A registry of all compiled-in backends enabled by feature flags.
///
/// Build once at startup and pass by reference to [`Rig::new`] and
/// [`Rig::probe`].
pub fn builtin_registry() -> Registry {
    #[allow(unused_mut)]
    let mut registry = Registry::new();

    // The dummy claims any probed port, so it goes last.
    #[cfg(feature = "dummy")]
    registry.register(&rigkit_dummy::DUMMY_CAPS);

    registry
}

/// One row of the supported-model listing, enough for a UI picker.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Registry key for [`Rig::new`].
    pub model: RigModel,
    /// Human-readable model name.
    pub model_name: &'static str,
    /// How the model connects to the host.
    pub port_type: PortType,
    /// Fastest supported serial rate.
    pub serial_rate_max: u32,
    /// Advertised generic functions.
    pub functions: RigFunctions,
}

/// Enumerate every model in the builtin registry.
pub fn supported_models() -> Vec<ModelInfo> {
    builtin_registry()
        .iter()
        .map(|caps| ModelInfo {
            model: caps.model,
            model_name: caps.model_name,
            port_type: caps.port_type,
            serial_rate_max: caps.serial_rate_max,
            functions: caps.functions,
        })
        .collect()
}
