use clap::Args;
use precast_app::{config::StoreConfig, domain::currency::format_kes};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    store: StoreConfig,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let context = crate::cli::connect(&args.store)?;
    let editor = crate::cli::editor(&context);

    let products = editor
        .products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Base Price", "Transport", "Status"]);

    for product in &products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            format_kes(product.base_price),
            format_kes(product.transport_cost),
            product.availability_label().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    println!("{table}");

    Ok(())
}
