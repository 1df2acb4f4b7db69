//! Submit Inquiry Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::inquiries::data::NewInquiry;

use crate::{extensions::*, inquiries::errors::into_status_error, state::State};

/// Submit Inquiry Request
///
/// Missing fields are treated as blank and rejected.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct SubmitInquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub product_name: Option<String>,
    pub description: String,
}

impl From<SubmitInquiryRequest> for NewInquiry {
    fn from(request: SubmitInquiryRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            product_name: request.product_name,
            description: request.description,
        }
    }
}

/// Submit Inquiry Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitInquiryResponse {
    pub message: String,
}

/// Submit Inquiry Handler
///
/// Public. The inquiry is mailed to the admin inbox and not stored.
#[endpoint(
    tags("inquiries"),
    summary = "Submit Inquiry",
    responses(
        (status_code = StatusCode::OK, description = "Inquiry forwarded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Mail delivery failed"),
    ),
)]
#[tracing::instrument(name = "inquiries.submit", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<SubmitInquiryRequest>,
    depot: &mut Depot,
) -> Result<Json<SubmitInquiryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .inquiries
        .submit_inquiry(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubmitInquiryResponse {
        message: "Inquiry sent successfully".to_string(),
    }))
}
