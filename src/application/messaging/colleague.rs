//! Participant - The colleague used by the demonstration

use std::sync::Arc;
use crate::domain::entities::{ColleagueId, Message};
use crate::domain::traits::{Colleague, MediatorHandle, OutputSink};
use crate::application::errors::MediatorError;

/// A named colleague that reports received messages to an output sink
pub struct Participant {
    id: ColleagueId,
    name: String,
    mediator: MediatorHandle,
    sink: Arc<dyn OutputSink>,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        mediator: MediatorHandle,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            id: ColleagueId::new(),
            name: name.into(),
            mediator,
            sink,
        }
    }

    /// Line written for a received message
    pub fn format_notification(&self, message: &Message) -> String {
        format!("{} gets message: {}", self.name, message)
    }
}

impl Colleague for Participant {
    fn id(&self) -> ColleagueId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: &Message) -> Result<(), MediatorError> {
        tracing::debug!("{} sends: {}", self.name, message);
        self.mediator.route(message, &self.id)
    }

    fn notify(&self, message: &Message) {
        self.sink.write_line(&self.format_notification(message));
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
