use std::sync::Weak;
use crate::domain::entities::{ColleagueId, Message};
use crate::application::errors::MediatorError;

/// Mediator trait - routes a message from one colleague to its counterpart
pub trait Mediator: Send + Sync {
    /// Deliver `message` to the registered colleague that is not `sender`.
    ///
    /// Exactly one other colleague is notified before this returns. A sender
    /// that is not registered is rejected and nobody is notified.
    fn route(&self, message: &Message, sender: &ColleagueId) -> Result<(), MediatorError>;
}

/// Non-owning reference to a mediator, held by every colleague
#[derive(Clone)]
pub struct MediatorHandle {
    inner: Weak<dyn Mediator>,
}

impl MediatorHandle {
    /// Build a handle from a weak pointer to any concrete mediator
    pub fn from_weak<M: Mediator + 'static>(weak: &Weak<M>) -> Self {
        let inner: Weak<dyn Mediator> = weak.clone();
        Self { inner }
    }

    /// Route through the mediator if it is still alive
    pub fn route(&self, message: &Message, sender: &ColleagueId) -> Result<(), MediatorError> {
        let mediator = self.inner.upgrade().ok_or(MediatorError::Detached)?;
        mediator.route(message, sender)
    }

    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for MediatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediatorHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
