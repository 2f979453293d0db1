use crate::domain::entities::{ColleagueId, Message};
use crate::application::errors::MediatorError;

/// Colleague trait - a participant that only talks through a mediator
pub trait Colleague: Send + Sync {
    /// Identity used by the mediator for membership checks
    fn id(&self) -> ColleagueId;

    /// Display name used when reporting received messages
    fn name(&self) -> &str;

    /// Send a message to the other participant via the mediator
    fn send(&self, message: &Message) -> Result<(), MediatorError>;

    /// Receive a message routed by the mediator
    fn notify(&self, message: &Message);
}
