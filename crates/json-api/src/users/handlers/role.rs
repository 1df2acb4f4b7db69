//! Update Role Handler

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

use rentals_app::domain::users::records::Role;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Update Role Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateRoleRequest {
    /// `admin` or `user`
    pub role: String,
}

/// Update Role Handler
#[endpoint(
    tags("users"),
    summary = "Update User Role",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Role updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown role"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.update_role",
    skip(user, json, depot),
    fields(user_uuid = tracing::field::Empty, role = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UpdateRoleRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let user = user.into_inner();
    let role = json.into_inner().role.parse::<Role>().or_400("Unknown role")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("role", tracing::field::display(role));

    let updated = state
        .app
        .users
        .update_role(identity, user.into(), role)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
