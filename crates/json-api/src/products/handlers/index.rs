//! Product Index Handler

use salvo::prelude::*;

use crate::{extensions::*, products::get::ProductResponse};

/// Product Index Handler
///
/// Returns every product as a bare JSON array, oldest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
