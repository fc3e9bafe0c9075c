//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM repositories
//! - Unit of Work giving services access to the repositories

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{ProductRepository, ProductTable, UserRepository, UserTable};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductRepository, MockUserRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::FixedUnitOfWork;
