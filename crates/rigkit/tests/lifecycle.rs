//! End-to-end tests over the facade: builtin registry -> lifecycle ->
//! dispatch, with the mock connector standing in for a serial port.

use rigkit::dummy::DUMMY_MODEL;
use rigkit::{error_message, Mode, Registry, Rig, RigError, RigFunctions, RigModel, Vfo};
use rigkit_test_harness::MockConnector;

#[test]
fn builtin_registry_resolves_the_dummy() {
    let registry = rigkit::builtin_registry();
    let rig = Rig::new(&registry, DUMMY_MODEL).unwrap();
    assert_eq!(rig.caps().model_name, "Dummy");
    assert_eq!(rig.state.serial_rate, 115_200);
}

#[test]
fn unknown_model_is_not_found() {
    let registry = rigkit::builtin_registry();
    assert!(matches!(
        Rig::new(&registry, RigModel(0xDEAD)),
        Err(RigError::ModelNotFound)
    ));
}

#[test]
fn full_session_against_the_dummy() {
    let registry = rigkit::builtin_registry();
    let mut rig = Rig::new(&registry, DUMMY_MODEL).unwrap();

    let connector = MockConnector::new();
    rig.open(&connector).unwrap();
    assert!(rig.state.is_open());

    rig.set_freq(7_030_000).unwrap();
    assert_eq!(rig.get_freq().unwrap(), 7_030_000);

    rig.set_mode(Mode::CW).unwrap();
    assert_eq!(rig.get_mode().unwrap(), Mode::CW);

    rig.set_vfo(Vfo::B).unwrap();
    assert_eq!(rig.get_vfo().unwrap(), Vfo::B);

    rig.close().unwrap();
    assert!(!rig.state.is_open());
    rig.cleanup().unwrap();
}

#[test]
fn frequency_compensation_applies_before_the_backend() {
    let registry = rigkit::builtin_registry();
    let mut rig = Rig::new(&registry, DUMMY_MODEL).unwrap();
    rig.open(&MockConnector::new()).unwrap();

    // Identity by default.
    rig.set_freq(14_074_000).unwrap();
    assert_eq!(rig.get_freq().unwrap(), 14_074_000);

    // Calibrated factor scales what the backend sees.
    rig.state.freq_comp = 2.0;
    rig.set_freq(14_074_000).unwrap();
    assert_eq!(rig.get_freq().unwrap(), 28_148_000);
}

#[test]
fn probe_discovers_the_dummy() {
    let registry = rigkit::builtin_registry();
    let connector = MockConnector::new();
    let mut rig = Rig::probe(&registry, &connector, "/dev/ttyUSB0").unwrap();
    assert_eq!(rig.caps().model, DUMMY_MODEL);
    assert_eq!(rig.state.port_path, "/dev/ttyUSB0");
    assert!(rig.state.is_open());

    // The probed handle is live and usable.
    rig.set_freq(3_573_000).unwrap();
    assert_eq!(rig.get_freq().unwrap(), 3_573_000);
    rig.close().unwrap();
    rig.cleanup().unwrap();
}

#[test]
fn probe_with_unopenable_port_finds_nothing() {
    let registry = rigkit::builtin_registry();
    assert!(matches!(
        Rig::probe(&registry, &MockConnector::refusing(), "/dev/ttyUSB9"),
        Err(RigError::ModelNotFound)
    ));
}

#[test]
fn probe_over_empty_registry_finds_nothing() {
    let registry = Registry::new();
    assert!(matches!(
        Rig::probe(&registry, &MockConnector::new(), "/dev/ttyUSB0"),
        Err(RigError::ModelNotFound)
    ));
}

#[test]
fn dummy_advertises_all_generic_functions() {
    let registry = rigkit::builtin_registry();
    let rig = Rig::new(&registry, DUMMY_MODEL).unwrap();
    assert!(!rig.has_func(RigFunctions::SET_FREQ).is_empty());
    assert!(!rig.has_func(RigFunctions::GET_MODE).is_empty());
    assert!(!rig.has_func(RigFunctions::PROBE).is_empty());
}

#[test]
fn supported_models_lists_the_dummy() {
    let models = rigkit::supported_models();
    assert!(models
        .iter()
        .any(|m| m.model == DUMMY_MODEL && m.model_name == "Dummy"));
}

#[test]
fn error_codes_have_messages() {
    let err = Rig::new(&rigkit::builtin_registry(), RigModel(0xBEEF)).unwrap_err();
    assert_eq!(error_message(err.code()), Some("Rig model not found"));
    assert_eq!(error_message(0), Some("Command completed successfully"));
}
