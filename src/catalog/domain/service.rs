use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::{BookEvent, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    library_name: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            library_name: config.library_name.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn event(&self, event: BookEvent, book: &BookDto) -> LibraryResult<DomainEvent> {
        Ok(DomainEvent::for_book(event, book)?.with_metadata("library", &self.library_name))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.create(&BookEntity::from(book)).await?;
        tracing::info!(isbn = book.isbn.as_str(), title = book.title.as_str(), "book added");
        self.events_publisher.publish(&self.event(BookEvent::Added, book)?).await?;
        Ok(book.clone())
    }

    async fn issue_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut existing = self.book_repository.get(isbn).await?;
        existing.issue()?;
        self.book_repository.update(&existing).await?;
        tracing::info!(isbn, title = existing.title.as_str(), "book issued");
        let book = BookDto::from(&existing);
        self.events_publisher.publish(&self.event(BookEvent::Issued, &book)?).await?;
        Ok(book)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut existing = self.book_repository.get(isbn).await?;
        existing.return_book()?;
        self.book_repository.update(&existing).await?;
        tracing::info!(isbn, title = existing.title.as_str(), "book returned");
        let book = BookDto::from(&existing);
        self.events_publisher.publish(&self.event(BookEvent::Returned, &book)?).await?;
        Ok(book)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_title(title).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}
