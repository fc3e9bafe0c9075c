//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod product_repository;
mod user_repository;

pub use product_repository::{ProductRepository, ProductTable};
pub use user_repository::{UserRepository, UserTable};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
