//! Error Catcher
//!
//! Renders every 4xx and 5xx response without a body as `{"detail": "..."}`.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable reason for the failure
    pub detail: String,
}

pub(crate) fn error_catcher() -> Catcher {
    Catcher::default().hoop(render_detail)
}

#[handler]
async fn render_detail(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let detail = match &res.body {
        ResBody::Error(error) => error.detail.clone().unwrap_or_else(|| error.brief.clone()),
        _ => status.canonical_reason().unwrap_or("Error").to_string(),
    };

    res.render(Json(ErrorResponse { detail }));

    ctrl.skip_rest();
}
