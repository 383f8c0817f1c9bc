//! # Portsweep Common
//!
//! Domain models shared by the sweep engine and the command line front-end.
//!
//! * **[`network`]**: scan targets, host ranges and individual probes.
//! * **[`services`]**: the static port to service-name table.
//! * **[`config`]**: runtime knobs of a sweep.
//! * **[`error`]**: typed errors surfaced to the user.

pub mod config;
pub mod error;
pub mod network;
pub mod services;
