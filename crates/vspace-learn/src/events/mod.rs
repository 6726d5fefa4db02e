//! Learning event system.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.

pub mod dispatcher;
pub mod handler;
pub mod trace;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::LearningEventHandler;
pub use trace::TracingHandler;
pub use types::*;
