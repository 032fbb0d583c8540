use clap::Args;
use precast_app::{config::StoreConfig, domain::landing::LandingPage};
use tracing::warn;

#[derive(Debug, Args)]
pub(crate) struct LandingArgs {
    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: LandingArgs) -> Result<(), String> {
    let context = super::connect(&args.store)?;

    if let Err(error) = context.catalog.refresh().await {
        warn!("catalog unavailable, showing fallback: {error}");
    }

    let page = LandingPage::from_state(&context.catalog.state().await);

    let json = serde_json::to_string_pretty(&page)
        .map_err(|error| format!("failed to render landing page: {error}"))?;

    println!("{json}");

    Ok(())
}
