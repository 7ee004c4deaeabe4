use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event as a structured tracing record.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        tracing::info!(
            event_id = event.event_id.as_str(),
            event_name = event.name.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            created_at = %event.created_at,
            "domain event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::events::{BookEvent, DomainEvent};
    use crate::core::library::BookStatus;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::for_book(BookEvent::Added, &BookDto::new("Dune", "Frank Herbert", "isbn", BookStatus::Available))
            .expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}
