//! Depot helper extensions.

use std::any::Any;

use rentals_app::auth::Identity;
use salvo::prelude::{Depot, StatusError};

const IDENTITY_DEPOT_KEY: &str = "identity";
const BEARER_TOKEN_DEPOT_KEY: &str = "bearer_token";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_identity(&mut self, identity: Identity);

    /// The authenticated caller, or 401 when the auth middleware did not run.
    fn identity_or_401(&self) -> Result<Identity, StatusError>;

    fn insert_bearer_token(&mut self, token: String);

    fn bearer_token_or_401(&self) -> Result<&str, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.insert(IDENTITY_DEPOT_KEY, identity);
    }

    fn identity_or_401(&self) -> Result<Identity, StatusError> {
        self.get::<Identity>(IDENTITY_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }

    fn insert_bearer_token(&mut self, token: String) {
        self.insert(BEARER_TOKEN_DEPOT_KEY, token);
    }

    fn bearer_token_or_401(&self) -> Result<&str, StatusError> {
        self.get::<String>(BEARER_TOKEN_DEPOT_KEY)
            .map(String::as_str)
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }
}

#[cfg(test)]
mod tests {
    use rentals_app::domain::users::records::UserUuid;
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn identity_round_trips_through_depot() -> TestResult {
        let identity = Identity::admin(UserUuid::new());
        let mut depot = Depot::new();

        depot.insert_identity(identity);

        assert_eq!(depot.identity_or_401()?, identity);

        Ok(())
    }

    #[test]
    fn missing_identity_is_unauthorized() {
        let depot = Depot::new();

        let result = depot.identity_or_401();

        assert!(
            matches!(result, Err(ref error) if error.code == StatusCode::UNAUTHORIZED),
            "expected 401, got {result:?}"
        );
    }
}
