//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, product_handler};
use crate::domain::{LoginRequest, NewProduct, Product, RegisterRequest, UserResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Products Manager API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products Manager",
        version = "0.1.0",
        description = "Product catalog CRUD with user registration and JWT login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
    ),
    components(
        schemas(
            Product,
            NewProduct,
            UserResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;
