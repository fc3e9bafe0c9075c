//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They reach storage through the Unit of Work.

mod auth_service;
pub mod container;
mod product_service;
mod token;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator};
pub use product_service::{ProductManager, ProductStore};
pub use token::{Claims, TokenIssuer, TokenResponse};
