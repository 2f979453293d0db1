//! Messaging - Mediator and colleagues that exchange messages through it

pub mod colleague;
pub mod mediator;

pub use colleague::Participant;
pub use mediator::ConcreteMediator;
