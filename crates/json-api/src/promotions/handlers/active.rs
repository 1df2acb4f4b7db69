//! Active Promotions Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// Active Promotions Handler
///
/// Public; newest first.
#[endpoint(
    tags("promotions"),
    summary = "List Active Promotions",
    responses(
        (status_code = StatusCode::OK, description = "Active promotions"),
        (status_code = StatusCode::NOT_FOUND, description = "No active promotions"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotions = state
        .app
        .promotions
        .list_active()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        promotions.into_iter().map(PromotionResponse::from).collect(),
    ))
}
