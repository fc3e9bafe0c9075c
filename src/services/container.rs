//! Service Container - explicit constructor wiring of every service.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductManager, ProductStore, TokenIssuer};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductStore>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductStore>,
}

impl Services {
    pub fn new(auth_service: Arc<dyn AuthService>, product_service: Arc<dyn ProductStore>) -> Self {
        Self {
            auth_service,
            product_service,
        }
    }

    /// Wire every service over one database connection pool.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let tokens = TokenIssuer::from_config(config);

        Self::new(
            Arc::new(Authenticator::new(uow.clone(), tokens)),
            Arc::new(ProductManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductStore> {
        self.product_service.clone()
    }
}
