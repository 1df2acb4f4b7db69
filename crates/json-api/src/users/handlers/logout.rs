//! Log Out Handler

use std::sync::Arc;

use salvo::prelude::*;

use rentals_app::auth::parse_session_token;

use crate::{auth::into_status_error, extensions::*, state::State};

/// Log Out Handler
///
/// Revokes the session whose token authenticated this request.
#[endpoint(
    tags("users"),
    summary = "Log Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Session revoked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "users.logout", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let token = parse_session_token(depot.bearer_token_or_401()?)
        .map_err(|_ignored| StatusError::unauthorized().brief("Invalid session token"))?;

    let revoked = state
        .app
        .auth
        .revoke_session(token.token_uuid)
        .await
        .map_err(into_status_error)?;

    if !revoked {
        return Err(StatusError::unauthorized().brief("Session already ended"));
    }

    Ok(StatusCode::OK)
}
