use std::sync::Arc;
use crate::domain::entities::{Message, Slot};
use crate::domain::traits::{Colleague, OutputSink};
use crate::application::messaging::{ConcreteMediator, Participant};
use crate::application::errors::MediatorError;

/// A mediator wired to its two participants.
///
/// Building one has no side effects; nothing is routed until a colleague sends.
pub struct Conversation {
    mediator: Arc<ConcreteMediator>,
}

impl Conversation {
    /// Wire a mediator and two participants that report to `sink`
    pub fn wire(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self, MediatorError> {
        let first_name = first_name.into();
        let second_name = second_name.into();

        let mediator = ConcreteMediator::with_colleagues(|handle| {
            let first = Participant::new(first_name, handle.clone(), sink.clone());
            let second = Participant::new(second_name, handle, sink);
            (Arc::new(first) as Arc<dyn Colleague>, Arc::new(second) as Arc<dyn Colleague>)
        })?;

        tracing::debug!("Wired {:?}", mediator);
        Ok(Self { mediator })
    }

    pub fn participant(&self, slot: Slot) -> &Arc<dyn Colleague> {
        self.mediator.colleague(slot)
    }
}

/// Service that drives the demonstration exchange
pub struct ConversationService {
    conversation: Conversation,
}

impl ConversationService {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }

    /// Send `opening` from the first participant, then `reply` from the second
    pub fn run(&self, opening: &Message, reply: &Message) -> Result<(), MediatorError> {
        let first = self.conversation.participant(Slot::First);
        let second = self.conversation.participant(Slot::Second);
        tracing::info!("Starting exchange between {} and {}", first.name(), second.name());

        first.send(opening)?;
        second.send(reply)?;

        tracing::info!("Exchange complete");
        Ok(())
    }
}
