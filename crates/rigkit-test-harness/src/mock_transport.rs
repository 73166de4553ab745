//! Mock transport for deterministic testing of backends and the rig
//! lifecycle.
//!
//! [`MockTransport`] implements the [`Transport`] trait with pre-loaded
//! request/response pairs, so protocol exchanges can be tested without
//! real hardware. [`MockConnector`] implements [`TransportConnector`] over
//! the same shared state, which lets a test hand the connector to
//! `Rig::open` and still preload expectations and inspect the sent-data
//! log afterwards.
//!
//! # Example
//!
//! ```
//! use rigkit_test_harness::MockConnector;
//!
//! let connector = MockConnector::new();
//! // Pre-load: when the backend sends this request, return this response.
//! connector.expect(b"FA;", b"FA00014074000;");
//! ```

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rigkit_core::error::{Result, RigError};
use rigkit_core::rig::RigState;
use rigkit_core::transport::{Transport, TransportConnector};

/// A pre-loaded request/response pair.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact bytes we expect to be sent.
    request: Vec<u8>,
    /// The bytes to return when the matching request is received.
    response: Vec<u8>,
}

#[derive(Debug, Default)]
struct MockInner {
    expectations: VecDeque<Expectation>,
    pending_response: Option<Vec<u8>>,
    response_cursor: usize,
    connected: bool,
    sent_log: Vec<Vec<u8>>,
}

fn not_connected() -> RigError {
    RigError::Io(io::Error::new(
        io::ErrorKind::NotConnected,
        "mock transport not connected",
    ))
}

/// A mock [`Transport`] with scripted exchanges.
///
/// Expectations are consumed in order: `send()` records and matches the
/// outgoing bytes against the next expectation, `receive()` then drains
/// the corresponding response. A mismatch or an exhausted queue fails
/// with [`RigError::Protocol`]; reading with nothing pending fails with
/// [`RigError::Timeout`].
#[derive(Debug)]
pub struct MockTransport {
    inner: Arc<Mutex<MockInner>>,
}

impl MockTransport {
    /// Create a standalone mock transport in the connected state.
    pub fn new() -> Self {
        let inner = MockInner {
            connected: true,
            ..MockInner::default()
        };
        MockTransport {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Add an expected request/response pair.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// All data sent through this transport, one entry per `send()`.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().sent_log.clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.inner.lock().unwrap().expectations.len()
    }

    fn from_shared(inner: Arc<Mutex<MockInner>>) -> Self {
        MockTransport { inner }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.connected {
            return Err(not_connected());
        }

        inner.sent_log.push(data.to_vec());

        match inner.expectations.pop_front() {
            Some(expectation) => {
                if data != expectation.request.as_slice() {
                    return Err(RigError::Protocol);
                }
                inner.pending_response = Some(expectation.response);
                inner.response_cursor = 0;
                Ok(())
            }
            None => Err(RigError::Protocol),
        }
    }

    fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.connected {
            return Err(not_connected());
        }

        let Some(response) = inner.pending_response.clone() else {
            return Err(RigError::Timeout);
        };
        let remaining = &response[inner.response_cursor..];
        if remaining.is_empty() {
            inner.pending_response = None;
            inner.response_cursor = 0;
            return Err(RigError::Timeout);
        }
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        inner.response_cursor += n;
        if inner.response_cursor >= response.len() {
            inner.pending_response = None;
            inner.response_cursor = 0;
        }
        Ok(n)
    }

    fn close(&mut self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.connected = false;
        inner.pending_response = None;
        inner.response_cursor = 0;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.inner.lock().unwrap().connected
    }
}

/// A [`TransportConnector`] that hands out [`MockTransport`]s sharing this
/// connector's scripted state.
///
/// Created refusing nothing: every `connect` succeeds. Use
/// [`MockConnector::refusing`] to simulate a port that cannot be opened
/// (e.g. to test probe short-circuiting).
#[derive(Debug, Default)]
pub struct MockConnector {
    inner: Arc<Mutex<MockInner>>,
    refuse: bool,
}

impl MockConnector {
    /// A connector whose transports share one scripted exchange queue.
    pub fn new() -> Self {
        MockConnector::default()
    }

    /// A connector that refuses every connection attempt.
    pub fn refusing() -> Self {
        MockConnector {
            inner: Arc::default(),
            refuse: true,
        }
    }

    /// Add an expected request/response pair for the shared transport.
    pub fn expect(&self, request: &[u8], response: &[u8]) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// All data sent through transports created by this connector.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().sent_log.clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.inner.lock().unwrap().expectations.len()
    }
}

impl TransportConnector for MockConnector {
    fn connect(&self, _state: &RigState) -> Result<Box<dyn Transport>> {
        if self.refuse {
            return Err(RigError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "mock connector refused connection",
            )));
        }
        self.inner.lock().unwrap().connected = true;
        Ok(Box::new(MockTransport::from_shared(self.inner.clone())))
    }
}
