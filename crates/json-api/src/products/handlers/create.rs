//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{CreateProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid admin token"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Record store unavailable"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
