//! Domain layer - Core abstractions of the mediator pattern
//! 
//! This layer contains:
//! - Entities: Messages and colleague identities
//! - Traits: Mediator, Colleague and output sink abstractions

pub mod entities;
pub mod traits;
