//! Request Account Deletion Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Request Account Deletion Handler
///
/// Flags the caller's account; an admin approves or rejects it later.
#[endpoint(
    tags("users"),
    summary = "Request Account Deletion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Deletion requested"),
        (status_code = StatusCode::CONFLICT, description = "Deletion already requested"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "users.request_deletion", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let user = state
        .app
        .users
        .request_deletion(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
