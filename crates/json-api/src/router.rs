//! Routes

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{auth, healthcheck, landing, observability::request_logging, products, state::State};

/// Public reads plus token-guarded product writes, with the OpenAPI document
/// and Swagger UI mounted alongside.
pub(crate) fn build(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("landing").get(landing::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::new().hoop(auth::middleware::handler).push(
                Router::with_path("products")
                    .post(products::create::handler)
                    .push(
                        Router::with_path("{id}")
                            .patch(products::update::handler)
                            .delete(products::delete::handler),
                    ),
            ),
        );

    let doc = OpenApi::new("Precast Catalog API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
