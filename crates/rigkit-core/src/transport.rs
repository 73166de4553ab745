//! Transport traits for rig communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a
//! transceiver. Implementations exist for serial ports (`rigkit-transport`)
//! and for mock transports used in testing (`rigkit-test-harness`). The
//! core treats a transport purely as a black box returning the shared
//! error space; framing and protocol concerns belong to the backends.
//!
//! The [`TransportConnector`] trait is the seam through which the rig
//! lifecycle opens a connection without depending on any concrete
//! transport crate: [`Rig::open`](crate::rig::Rig::open) takes a connector
//! and delegates the actual connection to it.

use std::time::Duration;

use crate::error::Result;
use crate::rig::RigState;

/// Synchronous byte-level transport to a rig.
///
/// All calls block for the duration of the underlying I/O. Timeout and
/// retry behavior are the implementation's concern; the core neither
/// enforces nor interprets them.
pub trait Transport: Send {
    /// Send raw bytes to the rig, blocking until all are written.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the rig into `buf`, waiting up to `timeout`.
    ///
    /// Returns the number of bytes actually read, or
    /// [`RigError::Timeout`](crate::error::RigError::Timeout) if nothing
    /// arrives within the deadline.
    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Close the transport connection.
    ///
    /// After `close()`, subsequent `send()` and `receive()` calls should
    /// fail with an I/O error.
    fn close(&mut self) -> Result<()>;

    /// Whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}

/// Opens a [`Transport`] from a handle's configured port parameters.
///
/// Passing the whole state block lets a connector honor the port path,
/// baud rate, framing, handshake, and timeout that
/// [`Rig::new`](crate::rig::Rig::new) seeded from the capability
/// descriptor (and that the caller may have overridden since).
pub trait TransportConnector {
    /// Open a connection described by `state`.
    ///
    /// A failure here is propagated unchanged by the lifecycle manager.
    fn connect(&self, state: &RigState) -> Result<Box<dyn Transport>>;
}
