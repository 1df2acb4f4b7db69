use clap::{Parser, Subcommand};

mod carts;
mod session;
mod user;

#[derive(Debug, Parser)]
#[command(name = "rentals-app", about = "Rentals admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Carts(carts::CartsCommand),
    Session(session::SessionCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Carts(command) => carts::run(command).await,
            Commands::Session(command) => session::run(command).await,
        }
    }
}
