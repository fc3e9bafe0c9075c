//! Product repository backed by the `products` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Every method is a single statement, so each one commits on its own.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product. A taken id fails with `Conflict`.
    async fn insert(&self, product: NewProduct) -> AppResult<Product>;

    /// All products, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find product by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Overwrite every column of the row with `product.id`. `NotFound` if absent.
    async fn replace(&self, product: Product) -> AppResult<()>;

    /// Delete product by id. `NotFound` if absent.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM implementation of [`ProductRepository`]
pub struct ProductTable {
    db: DatabaseConnection,
}

impl ProductTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductTable {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            quantity: Set(product.quantity),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Product"))?;

        Ok(Product::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(Product::from))
    }

    async fn replace(&self, product: Product) -> AppResult<()> {
        let changes = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            quantity: Set(product.quantity),
        };

        let result = ProductEntity::update_many()
            .set(changes)
            .filter(product::Column::Id.eq(product.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
