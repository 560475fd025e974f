use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::contacts::{
    repo::SeaOrmContactRepository, repository::ContactRepository, ContactService,
};

pub type SharedContactService = Arc<ContactService<dyn ContactRepository>>;

/// Handles injected into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub contacts: SharedContactService,
}

impl ServerState {
    /// State backed by the SeaORM repository on `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let repo: Arc<dyn ContactRepository> = Arc::new(SeaOrmContactRepository::new(db));
        Self::with_repository(repo)
    }

    pub fn with_repository(repo: Arc<dyn ContactRepository>) -> Self {
        Self { contacts: Arc::new(ContactService::new(repo)) }
    }
}
