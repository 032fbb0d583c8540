use clap::Args;
use precast_app::config::StoreConfig;

use super::ProductFields;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    fields: ProductFields,

    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let context = crate::cli::connect(&args.store)?;
    let mut editor = crate::cli::editor(&context);

    editor.begin_create();

    let product = super::fill_and_submit(&mut editor, &args.fields).await?;

    super::print_product(&product);

    Ok(())
}
