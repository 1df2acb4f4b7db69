//! Sign Up Handler

use std::{fmt, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::users::{data::NewUser, records::Role};

use crate::{
    extensions::*,
    state::State,
    users::{
        errors::into_status_error,
        models::{AddressBody, UserResponse},
    },
};

/// Sign Up Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: AddressBody,
    pub phone_number: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish_non_exhaustive()
    }
}

impl From<SignUpRequest> for NewUser {
    fn from(request: SignUpRequest) -> Self {
        NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            username: request.username,
            email: request.email,
            password: request.password,
            delivery_address: request.address.into(),
            phone_number: request.phone_number,
        }
    }
}

/// Sign Up Handler
///
/// New accounts always get the `user` role.
#[endpoint(
    tags("users"),
    summary = "Sign Up",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Username or email already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.signup",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<SignUpRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .sign_up(json.into_inner().into(), Role::User)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    res.add_header(LOCATION, "/users/me", true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}
