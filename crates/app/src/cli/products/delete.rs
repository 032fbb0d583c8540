use clap::Args;
use precast_app::{config::StoreConfig, domain::products::models::ProductId};

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product id
    id: String,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,

    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let context = crate::cli::connect(&args.store)?;
    let mut editor = crate::cli::editor(&context);

    let issued = editor
        .delete_product(ProductId::new(args.id.clone()), args.yes)
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    if issued {
        println!("deleted product {}", args.id);
    } else {
        println!("not deleted; pass --yes to confirm");
    }

    Ok(())
}
