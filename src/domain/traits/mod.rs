//! Domain traits - Abstractions implemented by the application and infrastructure layers

pub mod colleague;
pub mod mediator;
pub mod sink;

pub use colleague::Colleague;
pub use mediator::{Mediator, MediatorHandle};
pub use sink::OutputSink;
