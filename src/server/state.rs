use std::sync::Arc;
use actix_web::web;
use crate::server::database::error::StorageError;
use crate::server::database::store::OrderStore;

#[derive(Clone)]
pub(crate) struct AppState {
    store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
        }
    }

    pub fn get_store(&self) -> Arc<dyn OrderStore> {
        self.store.clone()
    }

    /// Run a store operation on actix's blocking pool so workers never wait on disk.
    pub async fn with_store<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&dyn OrderStore) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.get_store();
        web::block(move || f(store.as_ref())).await?
    }
}
