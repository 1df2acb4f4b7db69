use std::sync::Arc;

use clap::Args;
use rentals_app::{
    database,
    domain::users::{
        PgUsersRepository, UsersManager, UsersService,
        data::NewUser,
        records::{DeliveryAddress, Role},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    /// Initial password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    phone_number: String,

    #[arg(long)]
    street_address: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    state: String,

    #[arg(long)]
    postal_code: String,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let service = UsersManager::new(Arc::new(PgUsersRepository::new(pool)));

    let user = service
        .sign_up(
            NewUser {
                first_name: args.first_name,
                last_name: args.last_name,
                username: args.username,
                email: args.email,
                password: args.password,
                delivery_address: DeliveryAddress {
                    street_address: args.street_address,
                    city: args.city,
                    state: args.state,
                    postal_code: args.postal_code,
                },
                phone_number: args.phone_number,
            },
            Role::Admin,
        )
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("username: {}", user.username);
    println!("role: {}", user.role);

    Ok(())
}
