use clap::Args;
use precast_app::{config::StoreConfig, domain::products::models::ProductId};

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product id
    id: String,

    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: ShowProductArgs) -> Result<(), String> {
    let context = crate::cli::connect(&args.store)?;

    let product = context
        .products
        .get_product(ProductId::new(args.id))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    super::print_product(&product);

    Ok(())
}
