//! Port definitions for the player crate
//!
//! Outbound ports abstract the platform the client runs on (browser or
//! desktop). Concrete adapters live in `infrastructure::platform`.

pub mod outbound;
