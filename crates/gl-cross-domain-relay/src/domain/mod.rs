//! Domain layer: envelope and outcome types, no I/O.

pub mod envelope;
pub mod errors;
pub mod value_objects;

pub use envelope::RelayEnvelope;
pub use errors::RelayError;
pub use value_objects::{CallFailure, CallStatus};
