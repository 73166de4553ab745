//! rigkit-dummy: a loopback backend with no hardware behind it.
//!
//! [`DummyRig`] keeps frequency, mode, and VFO in memory and answers every
//! generic operation from there, so applications and tests can exercise the
//! full registry → lifecycle → dispatch path without a physical
//! transceiver. Its probe hook claims any port it is offered, which makes
//! it useful as a demo target and means it should be registered last in
//! registries used for real discovery.

use tracing::debug;

use rigkit_core::caps::{Backend, RigCaps};
use rigkit_core::error::Result;
use rigkit_core::rig::RigState;
use rigkit_core::types::{
    DataBits, Handshake, Mode, Parity, PortType, PttType, RigFunctions, RigModel, StopBits, Vfo,
};
use std::time::Duration;

/// Model identifier of the dummy rig.
pub const DUMMY_MODEL: RigModel = RigModel(1);

/// The dummy protocol engine: pure in-memory state, no I/O.
#[derive(Debug)]
pub struct DummyRig {
    freq: u64,
    mode: Mode,
    vfo: Vfo,
}

impl DummyRig {
    fn new() -> Self {
        DummyRig {
            // Parked on the FT8 calling frequency, 20m, main VFO.
            freq: 14_074_000,
            mode: Mode::USB,
            vfo: Vfo::A,
        }
    }
}

impl Backend for DummyRig {
    fn init(&mut self, _state: &mut RigState) -> Result<()> {
        debug!("dummy rig initialized");
        Ok(())
    }

    fn open(&mut self, _state: &mut RigState) -> Result<()> {
        debug!("dummy rig opened");
        Ok(())
    }

    fn close(&mut self, _state: &mut RigState) -> Result<()> {
        debug!("dummy rig closed");
        Ok(())
    }

    fn cleanup(&mut self, _state: &mut RigState) -> Result<()> {
        debug!("dummy rig cleaned up");
        Ok(())
    }

    fn probe(&mut self, state: &mut RigState) -> Result<bool> {
        debug!(path = %state.port_path, "dummy rig claims port");
        Ok(true)
    }

    fn set_freq(&mut self, _state: &mut RigState, freq: u64) -> Result<()> {
        debug!(freq, "dummy set_freq");
        self.freq = freq;
        Ok(())
    }

    fn get_freq(&mut self, _state: &mut RigState) -> Result<u64> {
        Ok(self.freq)
    }

    fn set_mode(&mut self, _state: &mut RigState, mode: Mode) -> Result<()> {
        debug!(%mode, "dummy set_mode");
        self.mode = mode;
        Ok(())
    }

    fn get_mode(&mut self, _state: &mut RigState) -> Result<Mode> {
        Ok(self.mode)
    }

    fn set_vfo(&mut self, _state: &mut RigState, vfo: Vfo) -> Result<()> {
        debug!(%vfo, "dummy set_vfo");
        self.vfo = vfo;
        Ok(())
    }

    fn get_vfo(&mut self, _state: &mut RigState) -> Result<Vfo> {
        Ok(self.vfo)
    }
}

/// Capability descriptor for the dummy rig.
pub static DUMMY_CAPS: RigCaps = RigCaps {
    model: DUMMY_MODEL,
    model_name: "Dummy",
    port_type: PortType::Serial,
    serial_rate_min: 300,
    serial_rate_max: 115_200,
    serial_data_bits: DataBits::Eight,
    serial_stop_bits: StopBits::One,
    serial_parity: Parity::None,
    serial_handshake: Handshake::None,
    timeout: Duration::from_millis(200),
    retry: 3,
    ptt_type: PttType::Cat,
    functions: RigFunctions::ALL_GENERIC.union(RigFunctions::PROBE),
    backend: || Box::new(DummyRig::new()),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_operations_round_trip() {
        let mut state = RigState::default();
        let mut rig = DummyRig::new();

        rig.set_freq(&mut state, 7_030_000).unwrap();
        assert_eq!(rig.get_freq(&mut state).unwrap(), 7_030_000);

        rig.set_mode(&mut state, Mode::CW).unwrap();
        assert_eq!(rig.get_mode(&mut state).unwrap(), Mode::CW);

        rig.set_vfo(&mut state, Vfo::B).unwrap();
        assert_eq!(rig.get_vfo(&mut state).unwrap(), Vfo::B);
    }

    #[test]
    fn dummy_starts_on_ft8_calling_frequency() {
        let mut state = RigState::default();
        let mut rig = DummyRig::new();
        assert_eq!(rig.get_freq(&mut state).unwrap(), 14_074_000);
        assert_eq!(rig.get_mode(&mut state).unwrap(), Mode::USB);
        assert_eq!(rig.get_vfo(&mut state).unwrap(), Vfo::A);
    }

    #[test]
    fn dummy_probe_claims_any_port() {
        let mut state = RigState::default();
        let mut rig = DummyRig::new();
        assert!(rig.probe(&mut state).unwrap());
    }

    #[test]
    fn dummy_caps_advertise_everything() {
        assert!(DUMMY_CAPS.functions.contains(RigFunctions::ALL_GENERIC));
        assert!(DUMMY_CAPS.functions.contains(RigFunctions::PROBE));
        assert_eq!(DUMMY_CAPS.model, DUMMY_MODEL);
    }
}
