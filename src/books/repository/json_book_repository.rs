use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Catalog held in memory and mirrored to a JSON file.
///
/// The whole list is rewritten after every mutation. When the rewrite fails the
/// in-memory change is undone so the list keeps matching what the caller was told.
/// Without a path nothing is ever written.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: Option<PathBuf>,
    books: RwLock<Vec<BookEntity>>,
}

impl JsonBookRepository {
    /// Opens the catalog at `path`. A missing, unreadable or corrupt file yields an
    /// empty catalog; the corrupt content is replaced by the next mutation.
    pub async fn open(path: &Path) -> Self {
        let books = match read_catalog(path).await {
            Ok(Some(books)) => {
                tracing::info!(path = %path.display(), count = books.len(), "catalog loaded");
                books
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "no existing catalog found, starting fresh");
                vec![]
            }
            Err(err @ LibraryError::Serialization { .. }) => {
                tracing::error!(path = %path.display(), error = %err, "corrupted catalog file, starting fresh");
                vec![]
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load catalog, starting fresh");
                vec![]
            }
        };
        Self {
            path: Some(path.to_path_buf()),
            books: RwLock::new(books),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            books: RwLock::new(vec![]),
        }
    }

    async fn persist(&self, books: &[BookEntity]) -> LibraryResult<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(books)?;
        match tokio::fs::write(path, json).await {
            Ok(_) => {
                tracing::info!(path = %path.display(), count = books.len(), "catalog saved");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to save catalog");
                Err(LibraryError::from(err))
            }
        }
    }
}

/// Reads the catalog file, returning `None` when it does not exist.
pub async fn read_catalog(path: &Path) -> LibraryResult<Option<Vec<BookEntity>>> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LibraryError::from(err)),
    };
    let books: Vec<BookEntity> = serde_json::from_str(&json)?;
    Ok(Some(books))
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(format!("book with ISBN {} already exists",
                                                           entity.isbn).as_str()));
        }
        books.push(entity.clone());
        if let Err(err) = self.persist(&books).await {
            books.pop();
            return Err(err);
        }
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let Some(pos) = books.iter().position(|b| b.id() == entity.id()) else {
            return Err(LibraryError::not_found(format!("book not found for {}", entity.isbn).as_str()));
        };
        let previous = std::mem::replace(&mut books[pos], entity.clone());
        if let Err(err) = self.persist(&books).await {
            books[pos] = previous;
            return Err(err);
        }
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.title_matches(title)).cloned().collect())
    }
}
