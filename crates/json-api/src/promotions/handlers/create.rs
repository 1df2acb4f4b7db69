//! Create Promotion Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::promotions::data::NewPromotion;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// Create Promotion Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromotionRequest {
    pub title: String,
    pub message: String,
    pub image_url: String,

    #[serde(default)]
    pub is_active: bool,
}

impl From<CreatePromotionRequest> for NewPromotion {
    fn from(request: CreatePromotionRequest) -> Self {
        Self {
            title: request.title,
            message: request.message,
            image_url: request.image_url,
            is_active: request.is_active,
        }
    }
}

/// Create Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "promotions.create",
    skip(json, depot, res),
    fields(promotion_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let promotion = state
        .app
        .promotions
        .create_promotion(identity, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("promotion_uuid", tracing::field::display(promotion.uuid));

    res.add_header(LOCATION, format!("/promotions/{}", promotion.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(promotion.into()))
}
