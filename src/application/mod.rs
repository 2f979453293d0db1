//! Application layer - Mediator implementation and use cases
//! 
//! This layer contains:
//! - Messaging: The concrete mediator and its participants
//! - Services: Wiring and the demonstration exchange
//! - Errors: Routing and configuration errors

pub mod errors;
pub mod messaging;
pub mod services;
