//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or overwrite hash and email of an existing user
    /// with the same name, in one statement.
    async fn upsert(&self, user: User) -> AppResult<User>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>>;
}

/// SeaORM implementation of [`UserRepository`]
pub struct UserTable {
    db: DatabaseConnection,
}

impl UserTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserTable {
    async fn upsert(&self, user: User) -> AppResult<User> {
        let user_name = user.user_name.clone();
        let active_model = ActiveModel {
            user_name: Set(user.user_name),
            password_hash: Set(user.password_hash),
            email: Set(user.email),
        };

        UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::UserName)
                    .update_columns([user::Column::PasswordHash, user::Column::Email])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find_by_user_name(&user_name)
            .await?
            .ok_or_else(|| AppError::internal(format!("User {} vanished after upsert", user_name)))
    }

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(user_name.to_string())
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }
}
