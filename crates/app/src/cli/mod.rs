use std::sync::Arc;

use clap::{Parser, Subcommand};
use precast_app::{
    config::StoreConfig,
    context::AppContext,
    domain::editor::{AdminEditor, TracingNotifier},
};

mod landing;
mod products;

#[derive(Debug, Parser)]
#[command(name = "precast-app", about = "Precast catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Landing(landing::LandingArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(command).await,
            Commands::Landing(args) => landing::run(args).await,
        }
    }
}

fn connect(store: &StoreConfig) -> Result<AppContext, String> {
    AppContext::from_config(store).map_err(|error| format!("failed to initialise store: {error}"))
}

fn editor(context: &AppContext) -> AdminEditor {
    context.admin_editor(Arc::new(TracingNotifier))
}
