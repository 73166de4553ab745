//! The backend capability contract.
//!
//! Every device family plugs into rigkit by supplying two things:
//!
//! - a [`RigCaps`] descriptor: the compiled-in, immutable description of
//!   one model's defaults and supported operations, registered with the
//!   [`Registry`](crate::registry::Registry);
//! - a [`Backend`] implementation: the protocol engine the descriptor's
//!   constructor produces for each handle.
//!
//! The core never learns any protocol detail. It resolves a model to its
//! descriptor, seeds per-handle state from the descriptor's defaults, and
//! forwards generic operations to the backend instance.

use std::time::Duration;

use crate::error::{Result, RigError};
use crate::rig::RigState;
use crate::types::{
    DataBits, Handshake, Mode, Parity, PortType, PttType, RigFunctions, RigModel, StopBits, Vfo,
};

/// A device family's protocol implementation.
///
/// Every method is optional: lifecycle hooks default to a no-op, generic
/// operations default to
/// [`RigError::NotImplemented`]. A backend overrides exactly the entries
/// its protocol supports, and advertises them in its descriptor's
/// [`functions`](RigCaps::functions) mask.
///
/// Backend-private data lives in the implementing struct itself: acquired
/// in [`init`](Backend::init), released in [`cleanup`](Backend::cleanup)
/// or when the handle is dropped. The core never inspects it.
///
/// All methods receive the handle's mutable [`RigState`], which carries
/// the transport ([`RigState::transport`]) and the live port parameters.
pub trait Backend: Send {
    /// Set up backend-private data after the handle is constructed.
    ///
    /// Runs before any transport is attached; protocol I/O is not possible
    /// here. A failure aborts construction.
    fn init(&mut self, _state: &mut RigState) -> Result<()> {
        Ok(())
    }

    /// Device-specific initialization after the transport is attached.
    ///
    /// A failure aborts the open and detaches the transport again.
    fn open(&mut self, _state: &mut RigState) -> Result<()> {
        Ok(())
    }

    /// Device-specific shutdown before the transport is detached.
    ///
    /// The place for a courtesy "goodbye" sequence while the connection is
    /// still up.
    fn close(&mut self, _state: &mut RigState) -> Result<()> {
        Ok(())
    }

    /// Release backend-private data. Runs only after a successful close.
    fn cleanup(&mut self, _state: &mut RigState) -> Result<()> {
        Ok(())
    }

    /// Experimental: decide whether the device on the already-opened port
    /// speaks this backend's protocol. `Ok(true)` claims the device.
    fn probe(&mut self, _state: &mut RigState) -> Result<bool> {
        Err(RigError::NotImplemented)
    }

    /// Set the frequency in hertz.
    fn set_freq(&mut self, _state: &mut RigState, _freq: u64) -> Result<()> {
        Err(RigError::NotImplemented)
    }

    /// Read the current frequency in hertz.
    fn get_freq(&mut self, _state: &mut RigState) -> Result<u64> {
        Err(RigError::NotImplemented)
    }

    /// Set the operating mode.
    fn set_mode(&mut self, _state: &mut RigState, _mode: Mode) -> Result<()> {
        Err(RigError::NotImplemented)
    }

    /// Read the current operating mode.
    fn get_mode(&mut self, _state: &mut RigState) -> Result<Mode> {
        Err(RigError::NotImplemented)
    }

    /// Select the active VFO.
    fn set_vfo(&mut self, _state: &mut RigState, _vfo: Vfo) -> Result<()> {
        Err(RigError::NotImplemented)
    }

    /// Read the active VFO.
    fn get_vfo(&mut self, _state: &mut RigState) -> Result<Vfo> {
        Err(RigError::NotImplemented)
    }
}

/// Capability descriptor for one rig model.
///
/// One static instance per supported model, shared read-only by every
/// handle of that model for the life of the process. Handles copy the
/// default port parameters into their own state at construction
/// ([`Rig::new`](crate::rig::Rig::new)) and never reference them again,
/// so mutating handle state cannot affect other handles.
#[derive(Debug)]
pub struct RigCaps {
    /// Unique model identifier (the registry key).
    pub model: RigModel,
    /// Human-readable model name (e.g. "FT-747GX").
    pub model_name: &'static str,
    /// How this model connects to the host.
    pub port_type: PortType,
    /// Slowest serial rate the model supports.
    pub serial_rate_min: u32,
    /// Fastest serial rate the model supports. New handles default to this.
    pub serial_rate_max: u32,
    /// Data bits per serial character.
    pub serial_data_bits: DataBits,
    /// Stop bits per serial character.
    pub serial_stop_bits: StopBits,
    /// Serial parity.
    pub serial_parity: Parity,
    /// Serial handshake.
    pub serial_handshake: Handshake,
    /// Per-exchange response deadline, consumed by the transport.
    pub timeout: Duration,
    /// Retry count for failed exchanges, consumed by the transport.
    pub retry: u32,
    /// Push-to-talk control kind.
    pub ptt_type: PttType,
    /// Which generic functions this model advertises.
    pub functions: RigFunctions,
    /// Constructor for this model's protocol engine, invoked once per
    /// handle at construction.
    pub backend: fn() -> Box<dyn Backend>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareBackend;
    impl Backend for BareBackend {}

    #[test]
    fn default_hooks_are_no_ops() {
        let mut state = RigState::default();
        let mut b = BareBackend;
        assert!(b.init(&mut state).is_ok());
        assert!(b.open(&mut state).is_ok());
        assert!(b.close(&mut state).is_ok());
        assert!(b.cleanup(&mut state).is_ok());
    }

    #[test]
    fn default_operations_are_not_implemented() {
        let mut state = RigState::default();
        let mut b = BareBackend;
        assert!(matches!(
            b.set_freq(&mut state, 14_074_000),
            Err(RigError::NotImplemented)
        ));
        assert!(matches!(b.get_freq(&mut state), Err(RigError::NotImplemented)));
        assert!(matches!(
            b.set_mode(&mut state, Mode::USB),
            Err(RigError::NotImplemented)
        ));
        assert!(matches!(b.get_mode(&mut state), Err(RigError::NotImplemented)));
        assert!(matches!(
            b.set_vfo(&mut state, Vfo::A),
            Err(RigError::NotImplemented)
        ));
        assert!(matches!(b.get_vfo(&mut state), Err(RigError::NotImplemented)));
        assert!(matches!(b.probe(&mut state), Err(RigError::NotImplemented)));
    }
}
