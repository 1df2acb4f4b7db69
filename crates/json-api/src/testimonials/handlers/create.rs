//! Create Testimonial Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::testimonials::data::NewTestimonial;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, models::TestimonialResponse},
};

/// Create Testimonial Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateTestimonialRequest {
    pub name: String,
    pub review: String,

    /// 1 to 5
    pub rating: u8,
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(request: CreateTestimonialRequest) -> Self {
        Self {
            name: request.name,
            review: request.review,
            rating: request.rating,
        }
    }
}

/// Create Testimonial Handler
#[endpoint(
    tags("testimonials"),
    summary = "Publish Testimonial",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Testimonial published"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "testimonials.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTestimonialRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TestimonialResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(identity.user));

    let testimonial = state
        .app
        .testimonials
        .create_testimonial(identity, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(testimonial.into()))
}
