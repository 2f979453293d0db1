//! Two colleagues that talk only through a mediator.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::{AppError, ConfigError, MediatorError};
pub use application::messaging::{ConcreteMediator, Participant};
pub use application::services::{Conversation, ConversationService};
pub use domain::entities::{ColleagueId, Message, Slot};
pub use domain::traits::{Colleague, Mediator, MediatorHandle, OutputSink};
