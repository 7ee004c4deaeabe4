use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
        let issue_cmd = IssueBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(svc.clone());
        svc.add_book(&BookDto::new("test book", "author", "isbn", BookStatus::Available)).await.expect("should add book");

        let not_issued = return_cmd.execute(ReturnBookCommandRequest::new("isbn")).await;
        assert!(matches!(not_issued, Err(CommandError::InvalidState { .. })));

        let _ = issue_cmd.execute(IssueBookCommandRequest::new("isbn")).await.expect("should issue book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("isbn")).await.expect("should return book");
        assert_eq!(BookStatus::Available, res.book.status);
    }
}
