//! Authentication service - registration, login and token issuance.

use async_trait::async_trait;
use std::sync::Arc;

use super::token::{Claims, TokenIssuer};
use crate::domain::{LoginRequest, Password, RegisterRequest, User};
use crate::errors::{AppError, AppResult, CredentialRejection};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Hash the password and store the user, replacing any user of the same name.
    async fn register(&self, request: RegisterRequest) -> AppResult<User>;

    /// Check credentials and return a signed token.
    async fn login(&self, request: LoginRequest) -> AppResult<String>;

    /// Issue a token for an already authenticated user
    fn create_token(&self, user: &User) -> AppResult<String>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    tokens: TokenIssuer,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, tokens: TokenIssuer) -> Self {
        Self { uow, tokens }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let password_hash = Password::new(&request.password)?.into_string();
        let user = User::new(request.user_name, password_hash, request.email);

        let stored = self.uow.users().upsert(user).await?;
        tracing::info!(user_name = %stored.user_name, "User registered");

        Ok(stored)
    }

    async fn login(&self, request: LoginRequest) -> AppResult<String> {
        let user = self
            .uow
            .users()
            .find_by_user_name(&request.user_name)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_name = %request.user_name, "Login for unknown user");
                AppError::InvalidCredentials(CredentialRejection::UserNotFound)
            })?;

        let stored_password = Password::from_hash(user.password_hash.clone());
        if !stored_password.verify(&request.password) {
            tracing::debug!(user_name = %user.user_name, "Login with wrong password");
            return Err(AppError::InvalidCredentials(CredentialRejection::WrongPassword));
        }

        self.create_token(&user)
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        self.tokens.issue(user)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
