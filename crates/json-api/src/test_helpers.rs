//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use rebate::money::Money;
use rebate_app::{
    context::AppContext,
    domain::{
        pricing::MockPricingService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::{catcher::error_catcher, state::State};

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price_minor: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        name: name.to_string(),
        price: Money::from_minor(price_minor),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn strict_pricing_mock() -> MockPricingService {
    let mut pricing = MockPricingService::new();

    pricing.expect_calculate().never();

    pricing
}

pub(crate) fn state_with(products: MockProductsService, pricing: MockPricingService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        pricing: Arc::new(pricing),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, strict_pricing_mock())))
            .push(route),
    )
    .catcher(error_catcher())
}

pub(crate) fn pricing_service(pricing: MockPricingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_products_mock(), pricing)))
            .push(route),
    )
    .catcher(error_catcher())
}
