//! Product catalog handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::config::PRODUCTS_PATH;
use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A product with this id already exists")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> AppResult<Created<Product>> {
    let product = state.product_service.create_product(payload).await?;
    let location = format!("{}/{}", PRODUCTS_PATH, product.id);

    Ok(Created::at(location, product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Every stored product", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID, must equal the body id")
    ),
    request_body = Product,
    responses(
        (status = 204, description = "Product replaced"),
        (status = 400, description = "Path id does not match body id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    ValidatedJson(payload): ValidatedJson<Product>,
) -> AppResult<NoContent> {
    state.product_service.update_product(id, payload).await?;
    Ok(NoContent)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<NoContent> {
    state.product_service.delete_product(id).await?;
    Ok(NoContent)
}
