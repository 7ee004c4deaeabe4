use std::sync::Arc;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{error_reply, log_command_error};

pub const BOOK_NOT_FOUND: &str = "Book not found.";

/// Turns one shell action into a command call and the text shown to the user.
/// Every error is logged and rendered here so callers only ever see a reply.
pub struct CatalogController {
    add_cmd: AddBookCommand,
    issue_cmd: IssueBookCommand,
    return_cmd: ReturnBookCommand,
    get_cmd: GetBookCommand,
    search_cmd: SearchBooksCommand,
    list_cmd: ListBooksCommand,
}

impl CatalogController {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            add_cmd: AddBookCommand::new(catalog_service.clone()),
            issue_cmd: IssueBookCommand::new(catalog_service.clone()),
            return_cmd: ReturnBookCommand::new(catalog_service.clone()),
            get_cmd: GetBookCommand::new(catalog_service.clone()),
            search_cmd: SearchBooksCommand::new(catalog_service.clone()),
            list_cmd: ListBooksCommand::new(catalog_service),
        }
    }

    pub async fn add_book(&self, title: &str, author: &str, isbn: &str) -> String {
        match self.add_cmd.execute(AddBookCommandRequest::new(title, author, isbn)).await {
            Ok(_) => "Book added successfully!".to_string(),
            Err(err) => {
                log_command_error("add_book", &err);
                error_reply(&err)
            }
        }
    }

    pub async fn issue_book(&self, isbn: &str) -> String {
        match self.issue_cmd.execute(IssueBookCommandRequest::new(isbn)).await {
            Ok(_) => "Book issued successfully!".to_string(),
            Err(err) => {
                log_command_error("issue_book", &err);
                match err {
                    CommandError::NotFound { .. } => BOOK_NOT_FOUND.to_string(),
                    CommandError::InvalidState { .. } => "Book is not available.".to_string(),
                    other => error_reply(&other),
                }
            }
        }
    }

    pub async fn return_book(&self, isbn: &str) -> String {
        match self.return_cmd.execute(ReturnBookCommandRequest::new(isbn)).await {
            Ok(_) => "Book returned successfully!".to_string(),
            Err(err) => {
                log_command_error("return_book", &err);
                match err {
                    CommandError::NotFound { .. } => BOOK_NOT_FOUND.to_string(),
                    CommandError::InvalidState { .. } => "Book was not issued.".to_string(),
                    other => error_reply(&other),
                }
            }
        }
    }

    pub async fn list_books(&self) -> String {
        match self.list_cmd.execute(ListBooksCommandRequest::new()).await {
            Ok(res) if res.books.is_empty() => "no books in the inventory".to_string(),
            Ok(res) => res.books.iter()
                .enumerate()
                .map(|(i, book)| format!("{}. {}", i + 1, book))
                .collect::<Vec<String>>()
                .join("\n"),
            Err(err) => {
                log_command_error("list_books", &err);
                error_reply(&err)
            }
        }
    }

    pub async fn search_by_title(&self, title: &str) -> String {
        match self.search_cmd.execute(SearchBooksCommandRequest::new(title)).await {
            Ok(res) if res.books.is_empty() => "No books found.".to_string(),
            Ok(res) => res.books.iter()
                .map(|book| book.to_string())
                .collect::<Vec<String>>()
                .join("\n"),
            Err(err) => {
                log_command_error("search_by_title", &err);
                error_reply(&err)
            }
        }
    }

    pub async fn search_by_isbn(&self, isbn: &str) -> String {
        match self.get_cmd.execute(GetBookCommandRequest::new(isbn)).await {
            Ok(res) => res.book.to_string(),
            Err(err) => {
                log_command_error("search_by_isbn", &err);
                match err {
                    CommandError::NotFound { .. } => BOOK_NOT_FOUND.to_string(),
                    other => error_reply(&other),
                }
            }
        }
    }
}
