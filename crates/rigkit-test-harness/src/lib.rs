//! rigkit-test-harness: test doubles for rigkit.
//!
//! Provides [`MockTransport`] and [`MockConnector`] so backends and the
//! rig lifecycle can be exercised deterministically without hardware.

pub mod mock_transport;

pub use mock_transport::{MockConnector, MockTransport};
