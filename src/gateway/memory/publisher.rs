use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order. Clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}
