//! Dispatcher adapters binding the engine to a deployment shape.

pub mod local_dispatcher;
pub mod relay_dispatcher;

pub use local_dispatcher::LocalDispatcher;
pub use relay_dispatcher::RelayDispatcher;
