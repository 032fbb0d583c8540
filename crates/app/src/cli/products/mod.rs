use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use precast_app::domain::{
    currency::format_kes,
    editor::AdminEditor,
    products::{draft::ProductDraft, models::Product},
    uploads::ImageFile,
};

mod create;
mod delete;
mod edit;
mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    List(list::ListProductsArgs),
    Show(show::ShowProductArgs),
    Create(create::CreateProductArgs),
    Edit(edit::EditProductArgs),
    Delete(delete::DeleteProductArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(args).await,
        ProductsSubcommand::Show(args) => show::run(args).await,
        ProductsSubcommand::Create(args) => create::run(args).await,
        ProductsSubcommand::Edit(args) => edit::run(args).await,
        ProductsSubcommand::Delete(args) => delete::run(args).await,
    }
}

/// Form fields shared by `create` and `edit`.
#[derive(Debug, Args)]
struct ProductFields {
    /// Product name
    #[arg(long)]
    name: Option<String>,

    /// Product description; pass an empty string to clear it
    #[arg(long)]
    description: Option<String>,

    /// Base price in KES
    #[arg(long)]
    base_price: Option<String>,

    /// Transport cost in KES
    #[arg(long)]
    transport_cost: Option<String>,

    /// Whether the product is in stock
    #[arg(long)]
    available: Option<bool>,

    /// Image file to upload and append, may be repeated
    #[arg(long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,
}

impl ProductFields {
    fn apply(&self, draft: &mut ProductDraft) {
        if let Some(name) = &self.name {
            draft.name = Some(name.clone());
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
        if let Some(base_price) = &self.base_price {
            draft.base_price = Some(base_price.clone());
        }
        if let Some(transport_cost) = &self.transport_cost {
            draft.transport_cost = Some(transport_cost.clone());
        }
        if let Some(available) = self.available {
            draft.is_available = Some(available);
        }
    }
}

/// Apply the form fields, upload any images, then save.
async fn fill_and_submit(
    editor: &mut AdminEditor,
    fields: &ProductFields,
) -> Result<Product, String> {
    if let Some(draft) = editor.draft_mut() {
        fields.apply(draft);
    }

    if !fields.images.is_empty() {
        let files = read_images(&fields.images)?;

        editor
            .upload_images(files)
            .await
            .map_err(|error| format!("failed to upload images: {error}"))?;
    }

    editor
        .submit()
        .await
        .map_err(|error| format!("failed to save product: {error}"))
}

fn read_images(paths: &[PathBuf]) -> Result<Vec<ImageFile>, String> {
    paths
        .iter()
        .map(|path| {
            let bytes = fs::read(path)
                .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

            Ok(ImageFile {
                file_name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                content_type: mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string(),
                bytes,
            })
        })
        .collect()
}

fn print_product(product: &Product) {
    println!("id: {}", product.id);
    println!("name: {}", product.name);
    println!(
        "description: {}",
        product.description.as_deref().unwrap_or("none")
    );
    println!("base_price: {}", format_kes(product.base_price));
    println!("transport_cost: {}", format_kes(product.transport_cost));
    println!("status: {}", product.availability_label());
    println!(
        "created_at: {}",
        product
            .created_at
            .map_or_else(|| "unknown".to_string(), |value| value.to_string())
    );

    for (index, image) in product.images.iter().enumerate() {
        println!("image[{index}]: {image}");
    }
}
