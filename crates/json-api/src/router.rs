//! App Router

use salvo::prelude::*;

use crate::{
    calculate, catcher::error_catcher, config::http::AllowedOrigin, cors::cors_handler,
    healthcheck, observability::request_logging, products,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("calculate-discount").post(calculate::handler::handler))
}

/// Wrap a router with the hoops that must run before routing, so that
/// preflight requests and unmatched paths are logged and answered too.
pub(crate) fn app_service(router: Router, allowed_origin: &AllowedOrigin) -> Service {
    Service::new(router)
        .catcher(error_catcher())
        .hoop(request_logging)
        .hoop(cors_handler(allowed_origin))
}
