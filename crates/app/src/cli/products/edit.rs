use clap::Args;
use precast_app::{config::StoreConfig, domain::products::models::ProductId};

use super::ProductFields;

#[derive(Debug, Args)]
pub(crate) struct EditProductArgs {
    /// Product id
    id: String,

    #[command(flatten)]
    fields: ProductFields,

    /// Index of an existing image to drop, may be repeated
    #[arg(long = "remove-image", value_name = "INDEX")]
    remove_images: Vec<usize>,

    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: EditProductArgs) -> Result<(), String> {
    let context = crate::cli::connect(&args.store)?;
    let mut editor = crate::cli::editor(&context);

    let product = context
        .products
        .get_product(ProductId::new(args.id))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    editor.begin_edit(&product);

    // Highest index first so earlier removals don't shift later ones.
    let mut remove_images = args.remove_images;
    remove_images.sort_unstable_by(|a, b| b.cmp(a));
    remove_images.dedup();

    for index in remove_images {
        editor
            .remove_image(index)
            .map_err(|error| format!("failed to remove image: {error}"))?;
    }

    let product = super::fill_and_submit(&mut editor, &args.fields).await?;

    super::print_product(&product);

    Ok(())
}
