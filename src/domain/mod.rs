//! Domain layer - Core business entities and logic
//!
//! Plain data types for the product catalog and user accounts, plus the
//! password value object. Nothing here touches the database or HTTP.

pub mod password;
pub mod product;
pub mod user;

pub use password::Password;
pub use product::{NewProduct, Product};
pub use user::{LoginRequest, RegisterRequest, User, UserResponse};
