//! Update Promotion Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::promotions::data::PromotionUpdate;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// Update Promotion Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePromotionRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdatePromotionRequest> for PromotionUpdate {
    fn from(request: UpdatePromotionRequest) -> Self {
        Self {
            title: request.title,
            message: request.message,
            image_url: request.image_url,
            is_active: request.is_active,
        }
    }
}

/// Update Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Update Promotion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Promotion updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "promotions.update", skip(promotion, json, depot), err)]
pub(crate) async fn handler(
    promotion: PathParam<Uuid>,
    json: JsonBody<UpdatePromotionRequest>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let promotion = state
        .app
        .promotions
        .update_promotion(
            identity,
            promotion.into_inner().into(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(promotion.into()))
}
