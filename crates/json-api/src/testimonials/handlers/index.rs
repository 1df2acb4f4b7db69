//! List Testimonials Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, models::TestimonialResponse},
};

/// List Testimonials Handler
#[endpoint(
    tags("testimonials"),
    summary = "List Testimonials",
    responses(
        (status_code = StatusCode::OK, description = "Published testimonials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<TestimonialResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let testimonials = state
        .app
        .testimonials
        .list_testimonials()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}
