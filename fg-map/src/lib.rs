//! Map provider boundary and owned map session for the FloodGuard
//! emergency map.
//!
//! - `provider`: the `MapProvider` trait and the specs passed through it
//! - `session`: `MapSession`, which owns every handle the map view creates
//! - `wire`: JSON payloads for the browser map shim

pub mod error;
pub mod provider;
pub mod session;
pub mod wire;

#[cfg(test)]
mod testing;

pub use error::MapError;
pub use provider::{GeolocationError, MapEvent, MapProvider, MarkerKey};
pub use session::{MapSession, SessionPhase};
