//! Unit of Work - single access point to every repository.
//!
//! Services depend on this trait instead of concrete repositories, so tests
//! can hand them mock repositories and production can share one connection
//! pool across all of them.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{ProductRepository, ProductTable, UserRepository, UserTable};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of UnitOfWork over a SeaORM connection
pub struct Persistence {
    product_repo: Arc<ProductTable>,
    user_repo: Arc<UserTable>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            product_repo: Arc::new(ProductTable::new(db.clone())),
            user_repo: Arc::new(UserTable::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}

/// Unit of Work over caller-supplied repositories, typically mocks.
#[cfg(any(test, feature = "test-utils"))]
pub struct FixedUnitOfWork {
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
}

#[cfg(any(test, feature = "test-utils"))]
impl FixedUnitOfWork {
    pub fn new(
        products: impl ProductRepository + 'static,
        users: impl UserRepository + 'static,
    ) -> Self {
        Self {
            products: Arc::new(products),
            users: Arc::new(users),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl UnitOfWork for FixedUnitOfWork {
    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }
}
