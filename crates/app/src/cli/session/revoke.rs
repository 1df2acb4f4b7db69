use clap::Args;
use rentals_app::{
    auth::{PgSessionsRepository, SessionsRepository},
    database,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RevokeSessionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Session token UUID to revoke
    #[arg(long)]
    token_uuid: Uuid,
}

pub(crate) async fn run(args: RevokeSessionArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let revoked = PgSessionsRepository::new(pool)
        .revoke_session_token(args.token_uuid)
        .await
        .map(|record| record.is_some())
        .map_err(|error| format!("failed to revoke session: {error}"))?;

    if revoked {
        println!("revoked session {}", args.token_uuid);
    } else {
        println!("session {} was not active", args.token_uuid);
    }

    Ok(())
}
