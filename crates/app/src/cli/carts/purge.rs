use clap::Args;
use jiff::Timestamp;
use rentals_app::{
    database,
    domain::carts::{CartsRepository, PgCartsRepository},
};

#[derive(Debug, Args)]
pub(crate) struct PurgeCartsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: PurgeCartsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let purged = PgCartsRepository::new(pool)
        .purge_expired(Timestamp::now())
        .await
        .map_err(|error| format!("failed to purge carts: {error}"))?;

    println!("purged {purged} expired carts");

    Ok(())
}
