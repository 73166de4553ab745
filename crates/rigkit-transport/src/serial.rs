//! Serial port transport for rig communication.
//!
//! [`SerialTransport`] implements the [`Transport`] trait for USB virtual
//! COM ports and physical RS-232 connections, honoring the port path,
//! baud rate, framing, handshake, and timeout carried in the handle's
//! [`RigState`]. [`SerialConnector`] plugs it into the rig lifecycle as
//! the [`TransportConnector`] passed to `Rig::open`.
//!
//! # Example
//!
//! ```no_run
//! use rigkit_core::{Registry, Rig, RigModel};
//! use rigkit_transport::SerialConnector;
//!
//! # fn example(registry: &Registry) -> rigkit_core::Result<()> {
//! let mut rig = Rig::new(registry, RigModel(1))?;
//! rig.state.port_path = "/dev/ttyUSB0".to_string();
//! rig.open(&SerialConnector)?;
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};
use std::time::Duration;

use tracing::debug;

use rigkit_core::error::{Result, RigError};
use rigkit_core::rig::RigState;
use rigkit_core::transport::{Transport, TransportConnector};
use rigkit_core::types::{DataBits, Handshake, Parity, StopBits};

fn map_data_bits(bits: DataBits) -> serialport::DataBits {
    match bits {
        DataBits::Five => serialport::DataBits::Five,
        DataBits::Six => serialport::DataBits::Six,
        DataBits::Seven => serialport::DataBits::Seven,
        DataBits::Eight => serialport::DataBits::Eight,
    }
}

fn map_stop_bits(bits: StopBits) -> serialport::StopBits {
    match bits {
        StopBits::One => serialport::StopBits::One,
        StopBits::Two => serialport::StopBits::Two,
    }
}

fn map_parity(parity: Parity) -> serialport::Parity {
    match parity {
        Parity::None => serialport::Parity::None,
        Parity::Odd => serialport::Parity::Odd,
        Parity::Even => serialport::Parity::Even,
    }
}

fn map_handshake(handshake: Handshake) -> serialport::FlowControl {
    match handshake {
        Handshake::None => serialport::FlowControl::None,
        Handshake::Software => serialport::FlowControl::Software,
        Handshake::Hardware => serialport::FlowControl::Hardware,
    }
}

/// A [`Transport`] over a serial port.
pub struct SerialTransport {
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialTransport {
    /// Open the serial port described by `state`.
    pub fn open(state: &RigState) -> Result<Self> {
        let port = serialport::new(state.port_path.as_str(), state.serial_rate)
            .data_bits(map_data_bits(state.serial_data_bits))
            .stop_bits(map_stop_bits(state.serial_stop_bits))
            .parity(map_parity(state.serial_parity))
            .flow_control(map_handshake(state.serial_handshake))
            .timeout(state.timeout)
            .open()
            .map_err(|e| RigError::Io(e.into()))?;

        debug!(
            path = %state.port_path,
            rate = state.serial_rate,
            "serial port opened"
        );

        Ok(SerialTransport { port: Some(port) })
    }

    fn port(&mut self) -> Result<&mut dyn serialport::SerialPort> {
        match self.port.as_deref_mut() {
            Some(p) => Ok(p),
            None => Err(RigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "serial port closed",
            ))),
        }
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let port = self.port()?;
        port.set_timeout(timeout)
            .map_err(|e| RigError::Io(e.into()))?;
        match port.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(RigError::Timeout),
            Err(e) => Err(RigError::Io(e)),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the port handle releases the descriptor.
        if self.port.take().is_some() {
            debug!("serial port closed");
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}

/// [`TransportConnector`] producing [`SerialTransport`]s.
///
/// Stateless; the connection parameters all come from the handle state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialConnector;

impl TransportConnector for SerialConnector {
    fn connect(&self, state: &RigState) -> Result<Box<dyn Transport>> {
        Ok(Box::new(SerialTransport::open(state)?))
    }
}
