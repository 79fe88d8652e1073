//! Shared infrastructure for the topology engine
//!
//! Canonical entity storage with generation-checked keys, the topology error
//! type, and the logging bootstrap.

mod error;
pub mod logging;
mod registry;

pub use error::*;
pub use logging::*;
pub use registry::*;
