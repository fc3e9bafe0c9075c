//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity, keyed by user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
}

impl User {
    pub fn new(user_name: String, password_hash: String, email: String) -> Self {
        Self {
            user_name,
            password_hash,
            email,
        }
    }
}

/// Registration request. The plaintext password is hashed once and dropped.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login name, unique per user
    #[validate(length(min = 1, message = "User name is required"))]
    #[schema(example = "testuser")]
    pub user_name: String,
    /// Contact email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "testuser@example.com")]
    pub email: String,
    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "testpassword")]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "User name is required"))]
    #[schema(example = "testuser")]
    pub user_name: String,
    #[schema(example = "testpassword")]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "testuser")]
    pub user_name: String,
    #[schema(example = "testuser@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_name: user.user_name,
            email: user.email,
        }
    }
}
