//! Infrastructure adapters - platform-specific implementations of the
//! outbound ports.

pub mod platform;
