//! Concrete mediator - Routes messages between exactly two colleagues

use std::sync::Arc;
use crate::domain::entities::{ColleagueId, Message, Slot};
use crate::domain::traits::{Colleague, Mediator, MediatorHandle};
use crate::application::errors::MediatorError;

/// Two-party mediator.
///
/// Both colleagues are supplied at construction, so there is no partially
/// wired state. `first` and `second` must be distinct colleagues.
pub struct ConcreteMediator {
    first: Arc<dyn Colleague>,
    second: Arc<dyn Colleague>,
}

impl ConcreteMediator {
    /// Register `first` and `second`, which must be distinct colleagues
    pub fn new(
        first: Arc<dyn Colleague>,
        second: Arc<dyn Colleague>,
    ) -> Result<Self, MediatorError> {
        let mediator = Self { first, second };
        mediator.check_distinct()?;
        Ok(mediator)
    }

    /// Build the mediator and its colleagues in one step.
    ///
    /// `build` receives a handle to the mediator being constructed and returns
    /// the colleagues for the `first` and `second` slots. The handle must not
    /// be routed through until this returns.
    pub fn with_colleagues<F>(build: F) -> Result<Arc<Self>, MediatorError>
    where
        F: FnOnce(MediatorHandle) -> (Arc<dyn Colleague>, Arc<dyn Colleague>),
    {
        let mediator = Arc::new_cyclic(|weak| {
            let (first, second) = build(MediatorHandle::from_weak(weak));
            Self { first, second }
        });
        // Dropping the mediator on error leaves the colleagues detached
        mediator.check_distinct()?;
        Ok(mediator)
    }

    fn check_distinct(&self) -> Result<(), MediatorError> {
        let id = self.first.id();
        if id == self.second.id() {
            tracing::warn!("Rejected {} registered in both slots", self.first.name());
            return Err(MediatorError::DuplicateColleague(id));
        }
        Ok(())
    }

    /// Which slot `id` is registered in, if any
    pub fn slot_of(&self, id: &ColleagueId) -> Option<Slot> {
        if *id == self.first.id() {
            Some(Slot::First)
        } else if *id == self.second.id() {
            Some(Slot::Second)
        } else {
            None
        }
    }

    pub fn colleague(&self, slot: Slot) -> &Arc<dyn Colleague> {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }
}

impl Mediator for ConcreteMediator {
    fn route(&self, message: &Message, sender: &ColleagueId) -> Result<(), MediatorError> {
        let from = self.slot_of(sender).ok_or_else(|| {
            tracing::warn!("Rejected message from unregistered colleague {}", sender);
            MediatorError::UnregisteredColleague(*sender)
        })?;

        let recipient = self.colleague(from.other());
        tracing::debug!(
            "Routing {} -> {} ({} bytes)",
            self.colleague(from).name(),
            recipient.name(),
            message.text().len()
        );

        recipient.notify(message);
        Ok(())
    }
}

impl std::fmt::Debug for ConcreteMediator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcreteMediator")
            .field("first", &self.first.name())
            .field("second", &self.second.name())
            .finish()
    }
}
