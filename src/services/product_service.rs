//! Product service - CRUD over the product catalog.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Product store trait for dependency injection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a new product and return it with its final id
    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    /// List every product in insertion order
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Get product by id
    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// Replace the product stored under `id`; `product.id` must equal `id`
    async fn update_product(&self, id: i32, product: Product) -> AppResult<()>;

    /// Remove the product stored under `id`
    async fn delete_product(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProductStore using Unit of Work.
pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductStore for ProductManager<U> {
    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let created = self.uow.products().insert(product).await?;
        tracing::debug!(id = created.id, "Product created");
        Ok(created)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.uow.products().find_all().await
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.uow.products().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_product(&self, id: i32, product: Product) -> AppResult<()> {
        if product.id != id {
            return Err(AppError::bad_request(format!(
                "path id {} does not match body id {}",
                id, product.id
            )));
        }

        self.uow.products().replace(product).await
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.uow.products().delete(id).await?;
        tracing::debug!(id, "Product deleted");
        Ok(())
    }
}
