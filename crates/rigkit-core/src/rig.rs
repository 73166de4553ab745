//! The `Rig` handle: lifecycle management and generic dispatch.
//!
//! A [`Rig`] binds one controlled device instance to its model's
//! capability descriptor. Construction copies the descriptor's defaults
//! into a mutable [`RigState`]; [`Rig::open`] attaches a transport through
//! a [`TransportConnector`]; generic operations forward to the backend's
//! implementation; [`Rig::close`] detaches the transport and
//! [`Rig::cleanup`] consumes the handle.
//!
//! Dispatch never translates, retries, or masks a backend-returned error:
//! the backend's result comes back to the caller unchanged. The only
//! pre-transform in the core is the frequency compensation factor applied
//! by [`Rig::set_freq`].

use std::fmt;
use std::io;
use std::time::Duration;

use tracing::debug;

use crate::caps::{Backend, RigCaps};
use crate::error::{Result, RigError};
use crate::registry::Registry;
use crate::transport::{Transport, TransportConnector};
use crate::types::{
    DataBits, Handshake, Mode, Parity, PortType, PttType, RigFunctions, RigModel, StopBits, Vfo,
};

/// Port path used when the caller does not override it.
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyS0";

/// Per-handle mutable state.
///
/// Seeded by [`Rig::new`] with values **copied** from the capability
/// descriptor, never referenced, so a caller may freely mutate these
/// fields (to pick a port path or drop the baud rate) without affecting
/// the descriptor or any other handle of the same model.
pub struct RigState {
    /// How this handle connects to the device.
    pub port_type: PortType,
    /// Device path (serial) the transport should open.
    pub port_path: String,
    /// Serial rate in use. Defaults to the descriptor's fastest rate.
    pub serial_rate: u32,
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
    /// Frequency compensation factor applied by [`Rig::set_freq`].
    ///
    /// This is a pure multiplier: the construction default of `1.0` is the
    /// identity, and e.g. `1.000_005` corrects a +5 ppm reference offset.
    /// A value of `0.0` would forward every requested frequency as zero.
    pub freq_comp: f64,
    /// Live transport. `None` is the explicit "not attached" sentinel.
    transport: Option<Box<dyn Transport>>,
}

impl RigState {
    fn from_caps(caps: &RigCaps) -> Self {
        RigState {
            port_type: caps.port_type,
            port_path: DEFAULT_SERIAL_PORT.to_string(),
            // Fastest rate the model supports.
            serial_rate: caps.serial_rate_max,
            serial_data_bits: caps.serial_data_bits,
            serial_stop_bits: caps.serial_stop_bits,
            serial_parity: caps.serial_parity,
            serial_handshake: caps.serial_handshake,
            timeout: caps.timeout,
            retry: caps.retry,
            ptt_type: caps.ptt_type,
            freq_comp: 1.0,
            transport: None,
        }
    }

    /// The attached transport, for backend protocol I/O.
    ///
    /// Fails with an I/O error when no transport is attached, which is
    /// what a backend operation invoked before a successful
    /// [`Rig::open`] will see.
    pub fn transport(&mut self) -> Result<&mut dyn Transport> {
        match self.transport.as_deref_mut() {
            Some(t) => Ok(t),
            None => Err(RigError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "no transport attached",
            ))),
        }
    }

    /// Whether a transport is currently attached.
    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    fn attach(&mut self, transport: Box<dyn Transport>) {
        self.transport = Some(transport);
    }

    fn detach(&mut self) -> Option<Box<dyn Transport>> {
        self.transport.take()
    }
}

impl Default for RigState {
    fn default() -> Self {
        RigState {
            port_type: PortType::Serial,
            port_path: DEFAULT_SERIAL_PORT.to_string(),
            serial_rate: 9_600,
            serial_data_bits: DataBits::Eight,
            serial_stop_bits: StopBits::One,
            serial_parity: Parity::None,
            serial_handshake: Handshake::None,
            timeout: Duration::from_millis(200),
            retry: 3,
            ptt_type: PttType::default(),
            freq_comp: 1.0,
            transport: None,
        }
    }
}

impl fmt::Debug for RigState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RigState")
            .field("port_type", &self.port_type)
            .field("port_path", &self.port_path)
            .field("serial_rate", &self.serial_rate)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("freq_comp", &self.freq_comp)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

/// A handle to one controlled rig instance.
///
/// The descriptor reference is bound exactly once at construction and is
/// immutable thereafter; the state block and the backend instance are
/// exclusively owned by this handle. The handle is intended for
/// single-owner use; `&mut` receivers make that a compile-time property.
pub struct Rig {
    caps: &'static RigCaps,
    /// Mutable per-handle state, free for the caller to adjust between
    /// construction and [`open`](Rig::open).
    pub state: RigState,
    backend: Box<dyn Backend>,
}

impl Rig {
    /// Construct a handle for `model`.
    ///
    /// Resolves the descriptor through the registry
    /// ([`RigError::ModelNotFound`] on a miss), copies its defaults into
    /// fresh state, and runs the backend's `init` hook so it can set up
    /// its private data. An `init` failure aborts construction and is
    /// returned to the caller.
    pub fn new(registry: &Registry, model: RigModel) -> Result<Rig> {
        let caps = registry.get_caps(model)?;
        Rig::from_caps(caps)
    }

    fn from_caps(caps: &'static RigCaps) -> Result<Rig> {
        let mut state = RigState::from_caps(caps);
        let mut backend = (caps.backend)();
        backend.init(&mut state)?;
        Ok(Rig {
            caps,
            state,
            backend,
        })
    }

    /// The capability descriptor this handle is bound to.
    pub fn caps(&self) -> &'static RigCaps {
        self.caps
    }

    /// Attach a transport and run the backend's `open` hook.
    ///
    /// Dispatches on the configured port type: only serial is implemented
    /// here, anything else fails with [`RigError::NotImplemented`]. The
    /// actual connection is delegated to `connector`; its failure is
    /// propagated unchanged. If the `open` hook fails, the just-attached
    /// transport is closed again and the hook's error is returned.
    pub fn open(&mut self, connector: &dyn TransportConnector) -> Result<()> {
        if self.state.is_open() {
            return Err(RigError::InvalidConfiguration);
        }

        match self.state.port_type {
            PortType::Serial => {
                let transport = connector.connect(&self.state)?;
                self.state.attach(transport);
            }
            PortType::Network => return Err(RigError::NotImplemented),
        }

        debug!(
            model = self.caps.model.0,
            name = self.caps.model_name,
            path = %self.state.port_path,
            rate = self.state.serial_rate,
            "rig opened"
        );

        if let Err(e) = self.backend.open(&mut self.state) {
            if let Some(mut t) = self.state.detach() {
                let _ = t.close();
            }
            return Err(e);
        }
        Ok(())
    }

    /// Run the backend's `close` hook and detach the transport.
    ///
    /// The hook runs first so the backend can say goodbye to the device
    /// while the connection is still up; the transport is then closed and
    /// the slot cleared, making a repeated `close` a no-op on the
    /// transport. Transport teardown is carried out even when the hook
    /// fails; if both fail, the hook's error wins.
    pub fn close(&mut self) -> Result<()> {
        let hook = if self.state.is_open() {
            self.backend.close(&mut self.state)
        } else {
            Ok(())
        };

        let mut teardown = Ok(());
        if let Some(mut transport) = self.state.detach() {
            teardown = transport.close();
            debug!(model = self.caps.model.0, "rig closed");
        }

        hook.and(teardown)
    }

    /// Release the backend's private data and consume the handle.
    ///
    /// Must follow a successful [`close`](Rig::close): a handle whose
    /// transport is still attached is rejected with
    /// [`RigError::InvalidParameter`]. Consuming `self` makes a second
    /// cleanup, or any use after cleanup, unrepresentable.
    pub fn cleanup(mut self) -> Result<()> {
        if self.state.is_open() {
            return Err(RigError::InvalidParameter);
        }
        self.backend.cleanup(&mut self.state)
    }

    /// Experimental device discovery on `port_path`.
    ///
    /// Tries every registered descriptor that advertises
    /// [`RigFunctions::PROBE`], in registration order: construct a
    /// candidate, point it at `port_path`, open it, and ask its probe
    /// hook. The first hook returning `Ok(true)` yields the live handle,
    /// ownership transferred to the caller. Candidates that fail to
    /// construct or open, or whose probe declines, are torn down and the
    /// scan continues. [`RigError::ModelNotFound`] when nothing matches.
    pub fn probe(
        registry: &Registry,
        connector: &dyn TransportConnector,
        port_path: &str,
    ) -> Result<Rig> {
        for caps in registry.iter() {
            if !caps.functions.contains(RigFunctions::PROBE) {
                continue;
            }

            let mut rig = match Rig::from_caps(caps) {
                Ok(rig) => rig,
                Err(e) => {
                    debug!(name = caps.model_name, error = %e, "probe candidate failed to construct");
                    continue;
                }
            };
            rig.state.port_path = port_path.to_string();

            if let Err(e) = rig.open(connector) {
                debug!(name = caps.model_name, error = %e, "probe candidate failed to open");
                let _ = rig.cleanup();
                continue;
            }

            match rig.backend.probe(&mut rig.state) {
                Ok(true) => {
                    debug!(name = caps.model_name, path = port_path, "probe matched");
                    return Ok(rig);
                }
                _ => {
                    let _ = rig.close();
                    let _ = rig.cleanup();
                }
            }
        }
        Err(RigError::ModelNotFound)
    }

    /// Intersection of the descriptor's advertised-function mask and
    /// `func`.
    ///
    /// Callers treat any non-empty result as "supported":
    ///
    /// ```
    /// # use rigkit_core::types::RigFunctions;
    /// # fn demo(rig: &rigkit_core::rig::Rig) {
    /// if !rig.has_func(RigFunctions::SET_FREQ).is_empty() {
    ///     // show the frequency entry field
    /// }
    /// # }
    /// ```
    pub fn has_func(&self, func: RigFunctions) -> RigFunctions {
        self.caps.functions & func
    }

    /// Set the frequency in hertz on the currently selected VFO.
    ///
    /// The requested value is first scaled by
    /// [`freq_comp`](RigState::freq_comp) (identity at the default of
    /// `1.0`), then forwarded to the backend; the backend's result is
    /// returned unchanged.
    pub fn set_freq(&mut self, freq: u64) -> Result<()> {
        let scaled = (self.state.freq_comp * freq as f64).round() as u64;
        self.backend.set_freq(&mut self.state, scaled)
    }

    /// Read the current frequency in hertz.
    pub fn get_freq(&mut self) -> Result<u64> {
        self.backend.get_freq(&mut self.state)
    }

    /// Set the operating mode.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.backend.set_mode(&mut self.state, mode)
    }

    /// Read the current operating mode.
    pub fn get_mode(&mut self) -> Result<Mode> {
        self.backend.get_mode(&mut self.state)
    }

    /// Select the active VFO.
    pub fn set_vfo(&mut self, vfo: Vfo) -> Result<()> {
        self.backend.set_vfo(&mut self.state, vfo)
    }

    /// Read the active VFO.
    pub fn get_vfo(&mut self) -> Result<Vfo> {
        self.backend.get_vfo(&mut self.state)
    }
}

impl fmt::Debug for Rig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rig")
            .field("model", &self.caps.model)
            .field("model_name", &self.caps.model_name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
