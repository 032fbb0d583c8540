//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use precast_app::{
    context::AppContext,
    domain::{
        catalog::CatalogCache,
        products::{
            MockProductsService,
            models::{Product, ProductId},
            repository::MockProductsRepository,
        },
        uploads::ImageUploader,
    },
    storage::MockObjectStorage,
};

use crate::{auth::AdminToken, state::State};

pub(crate) const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub(crate) fn make_product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: None,
        base_price: Decimal::from(100),
        transport_cost: Decimal::from(10),
        images: Vec::new(),
        is_available: true,
        created_at: Some(Timestamp::UNIX_EPOCH),
    }
}

fn app_context(products: MockProductsService) -> AppContext {
    let mut repository = MockProductsRepository::new();

    repository.expect_list_products().never();

    let mut storage = MockObjectStorage::new();

    storage.expect_upload().never();

    AppContext {
        products: Arc::new(products),
        catalog: Arc::new(CatalogCache::new(Arc::new(repository))),
        uploader: Arc::new(ImageUploader::new(Arc::new(storage), "products")),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::shared(app_context(products), AdminToken::new(TEST_ADMIN_TOKEN))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
