//! Resolve Deletion Request Handler

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

use rentals_app::domain::users::data::DeletionDecision;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Admin decision on a deletion request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Decision {
    /// Delete the account
    Approve,

    /// Keep the account and clear the request
    Reject,
}

impl From<Decision> for DeletionDecision {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => DeletionDecision::Approve,
            Decision::Reject => DeletionDecision::Reject,
        }
    }
}

/// Resolve Deletion Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ResolveDeletionRequest {
    pub decision: Decision,
}

/// Resolve Deletion Request Handler
#[endpoint(
    tags("users"),
    summary = "Approve or Reject Deletion Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Request resolved"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "No pending request for user"),
        (status_code = StatusCode::CONFLICT, description = "User has bookings or promotions on record"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.resolve_deletion",
    skip(user, json, depot),
    fields(user_uuid = tracing::field::Empty, decision = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<ResolveDeletionRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let user = user.into_inner();
    let decision = json.into_inner().decision;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("decision", tracing::field::debug(decision));

    state
        .app
        .users
        .resolve_deletion_request(identity, user.into(), decision.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
