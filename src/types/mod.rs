//! Core type definitions.

mod port;

pub use port::{PortError, PortSpec, MAX_PORT};
