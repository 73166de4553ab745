//! rigkit-transport: transport implementations for rigkit.
//!
//! Currently provides the serial transport ([`SerialTransport`] /
//! [`SerialConnector`]); the core's lifecycle rejects other port kinds as
//! not implemented. Mock transports for testing live in
//! `rigkit-test-harness`.

pub mod serial;

pub use serial::{SerialConnector, SerialTransport};
