//! rigkit-core: types, capability contract, registry, and rig lifecycle.
//!
//! This crate defines the generic control layer that lets host software
//! address heterogeneous transceivers symmetrically: backends describe
//! themselves with a [`RigCaps`] descriptor and implement the [`Backend`]
//! trait; applications resolve a model through a [`Registry`], drive the
//! resulting [`Rig`] handle, and never see a protocol byte.
//!
//! # Key types
//!
//! - [`Rig`] -- handle lifecycle (construct/open/close/cleanup/probe) and
//!   generic dispatch (frequency, mode, VFO)
//! - [`Backend`] / [`RigCaps`] -- the backend extension contract
//! - [`Registry`] -- compiled-in descriptor collection
//! - [`Transport`] / [`TransportConnector`] -- byte-level collaborator seam
//! - [`RigError`] / [`Result`] -- the shared error code space

pub mod caps;
pub mod error;
pub mod registry;
pub mod rig;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use rigkit_core::*`.
pub use caps::{Backend, RigCaps};
pub use error::{error_message, Result, RigError, RIG_OK};
pub use registry::Registry;
pub use rig::{Rig, RigState, DEFAULT_SERIAL_PORT};
pub use transport::{Transport, TransportConnector};
pub use types::*;
