use tokio::io::BufReader;
use lms_inventory::catalog::factory::create_catalog_service;
use lms_inventory::catalog::shell::Shell;
use lms_inventory::core::controller::AppState;
use lms_inventory::core::domain::Configuration;
use lms_inventory::core::library::LibraryError;
use lms_inventory::core::repository::RepositoryStore;
use lms_inventory::utils::logs::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let state = AppState::new(config, RepositoryStore::JsonFile);
    let catalog_service = create_catalog_service(&state.config, state.store).await;

    let mut shell = Shell::new(&state.config, catalog_service,
                               BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    shell.run().await
}
