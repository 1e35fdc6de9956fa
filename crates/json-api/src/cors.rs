//! CORS
//!
//! Lets the browser client on another origin list products and request
//! calculations.

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{Method, header},
};

use crate::config::http::AllowedOrigin;

pub(crate) fn cors_handler(origin: &AllowedOrigin) -> CorsHandler {
    let allow_origin = match origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };

    Cors::new()
        .allow_origin(allow_origin)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .into_handler()
}
