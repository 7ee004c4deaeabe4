use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct IssueBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl IssueBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueBookCommandRequest {
    pub isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.catalog_service.issue_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}
