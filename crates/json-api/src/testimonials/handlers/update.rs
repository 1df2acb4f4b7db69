//! Update Testimonial Handler

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

use rentals_app::domain::testimonials::data::TestimonialUpdate;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, models::TestimonialResponse},
};

/// Update Testimonial Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub review: Option<String>,
    pub rating: Option<u8>,
}

impl From<UpdateTestimonialRequest> for TestimonialUpdate {
    fn from(request: UpdateTestimonialRequest) -> Self {
        Self {
            name: request.name,
            review: request.review,
            rating: request.rating,
        }
    }
}

/// Update Testimonial Handler
///
/// Author or admin only.
#[endpoint(
    tags("testimonials"),
    summary = "Update Testimonial",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Testimonial updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the author"),
        (status_code = StatusCode::NOT_FOUND, description = "Testimonial not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "testimonials.update", skip(testimonial, json, depot), err)]
pub(crate) async fn handler(
    testimonial: PathParam<Uuid>,
    json: JsonBody<UpdateTestimonialRequest>,
    depot: &mut Depot,
) -> Result<Json<TestimonialResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let testimonial = state
        .app
        .testimonials
        .update_testimonial(
            identity,
            testimonial.into_inner().into(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(testimonial.into()))
}
