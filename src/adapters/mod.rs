//! Adapters layer - infrastructure implementations of the ports.

pub mod events;
pub mod http;
pub mod postgres;
