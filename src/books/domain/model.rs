use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity is the persisted catalog record. Its serialized form is exactly the
// four string keys stored in the catalog file. A missing status reads as available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status,
        }
    }

    /// Moves the book from `available` to `issued`.
    pub fn issue(&mut self) -> LibraryResult<()> {
        if self.status != BookStatus::Available {
            return Err(LibraryError::invalid_state(format!("book is not available {}",
                                                           self.isbn).as_str(), Some(self.status.to_string())));
        }
        self.status = BookStatus::Issued;
        Ok(())
    }

    /// Moves the book from `issued` back to `available`.
    pub fn return_book(&mut self) -> LibraryResult<()> {
        if self.status != BookStatus::Issued {
            return Err(LibraryError::invalid_state(format!("book was not issued {}",
                                                           self.isbn).as_str(), Some(self.status.to_string())));
        }
        self.status = BookStatus::Available;
        Ok(())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", "author", "isbn", BookStatus::Available);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_issue_and_return() {
        let mut book = BookEntity::new("title", "author", "isbn", BookStatus::Available);
        book.issue().expect("should issue");
        assert_eq!(BookStatus::Issued, book.status);
        book.return_book().expect("should return");
        assert_eq!(BookStatus::Available, book.status);
    }

    #[tokio::test]
    async fn test_should_not_issue_twice() {
        let mut book = BookEntity::new("title", "author", "isbn", BookStatus::Available);
        book.issue().expect("should issue");
        assert!(matches!(book.issue(), Err(LibraryError::InvalidState { .. })));
        assert_eq!(BookStatus::Issued, book.status);
    }

    #[tokio::test]
    async fn test_should_not_return_available_book() {
        let mut book = BookEntity::new("title", "author", "isbn", BookStatus::Available);
        assert!(matches!(book.return_book(), Err(LibraryError::InvalidState { .. })));
        assert_eq!(BookStatus::Available, book.status);
    }

    #[tokio::test]
    async fn test_should_match_title_ignoring_case() {
        let book = BookEntity::new("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5", BookStatus::Available);
        assert!(book.title_matches("great"));
        assert!(book.title_matches("GATSBY"));
        assert!(!book.title_matches("mockingbird"));
    }

    #[tokio::test]
    async fn test_should_serialize_four_string_keys() {
        let book = BookEntity::new("1984", "George Orwell", "978-0-451-52494-2", BookStatus::Issued);
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(serde_json::json!({
            "title": "1984",
            "author": "George Orwell",
            "isbn": "978-0-451-52494-2",
            "status": "issued"
        }), val);
    }

    #[tokio::test]
    async fn test_should_default_missing_status_to_available() {
        let book: BookEntity = serde_json::from_str(r#"{"title": "Dune", "author": "Frank Herbert", "isbn": "isbn9"}"#)
            .expect("should deserialize");
        assert_eq!(BookStatus::Available, book.status);
    }
}
