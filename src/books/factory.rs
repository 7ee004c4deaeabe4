use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonBookRepository::open(config.catalog_path.as_path()).await)
        }
        RepositoryStore::Memory => {
            Box::new(JsonBookRepository::in_memory())
        }
    }
}
