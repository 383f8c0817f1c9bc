//! # Portsweep Core
//!
//! The sweep engine. [`network`] knows how to dial a single probe,
//! [`scanner`] plans a sweep, fans probes out under a concurrency cap and
//! funnels every finding through one writer.

pub mod network;
pub mod scanner;
