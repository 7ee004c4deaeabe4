use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

pub const BOOKS_GROUP: &str = "books";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
}

/// Catalog changes that are announced to the event publisher.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BookEvent {
    Added,
    Issued,
    Returned,
}

impl BookEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BookEvent::Added => "book_added",
            BookEvent::Issued => "book_issued",
            BookEvent::Returned => "book_returned",
        }
    }

    pub fn kind(&self) -> DomainEventType {
        match self {
            BookEvent::Added => DomainEventType::Added,
            BookEvent::Issued | BookEvent::Returned => DomainEventType::Updated,
        }
    }
}

// DomainEvent carries the state of one book after a catalog change.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    /// Builds the event for `book`, keyed by its id with the book itself as payload.
    pub fn for_book<B: Identifiable + Serialize>(event: BookEvent, book: &B) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: event.name().to_string(),
            group: BOOKS_GROUP.to_string(),
            key: book.id(),
            kind: event.kind(),
            metadata: HashMap::new(),
            json_data: serde_json::to_string(book)?,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// Decodes the payload back into the published record.
    pub fn data<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.json_data)
    }
}
