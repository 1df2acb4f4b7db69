//! List Deletion Requests Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// List Deletion Requests Handler
#[endpoint(
    tags("users"),
    summary = "List Pending Deletion Requests",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Users awaiting deletion"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let users = state
        .app
        .users
        .deletion_requests(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
