//! Product commands
//!
//! Commands: list, get, add, update, delete

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use northwind_db::{Product, ProductRepo};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use super::{print_done, print_not_found, print_record, print_records, Format};

#[derive(Parser, Debug)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List every product
    List,
    /// Show one product by id
    Get(ProductKeyArgs),
    /// Add a product; the server assigns its id
    Add(AddProductArgs),
    /// Change the given fields of an existing product
    Update(UpdateProductArgs),
    /// Delete a product by id
    Delete(ProductKeyArgs),
}

#[derive(Parser, Debug)]
pub struct ProductKeyArgs {
    /// Product id
    product_id: i32,
}

#[derive(Parser, Debug)]
pub struct AddProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    #[command(flatten)]
    fields: ProductFields,
}

#[derive(Parser, Debug)]
pub struct UpdateProductArgs {
    /// Product id
    product_id: i32,

    /// Product name
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    fields: ProductFields,
}

/// Optional product columns; only the given ones are written.
#[derive(Args, Debug, Default)]
pub struct ProductFields {
    #[arg(long)]
    supplier_id: Option<i32>,
    #[arg(long)]
    category_id: Option<i32>,
    /// Packaging description (e.g. "10 boxes")
    #[arg(long)]
    quantity_per_unit: Option<String>,
    /// Price per unit (e.g. 4.44)
    #[arg(long)]
    unit_price: Option<Decimal>,
    #[arg(long)]
    units_in_stock: Option<i32>,
    #[arg(long)]
    units_on_order: Option<i32>,
    #[arg(long)]
    reorder_level: Option<i32>,
    /// Mark the product discontinued (true) or active (false)
    #[arg(long, value_name = "BOOL")]
    discontinued: Option<bool>,
}

impl ProductFields {
    fn apply(self, product: &mut Product) {
        if self.supplier_id.is_some() {
            product.supplier_id = self.supplier_id;
        }
        if self.category_id.is_some() {
            product.category_id = self.category_id;
        }
        if self.quantity_per_unit.is_some() {
            product.quantity_per_unit = self.quantity_per_unit;
        }
        if self.unit_price.is_some() {
            product.unit_price = self.unit_price;
        }
        if self.units_in_stock.is_some() {
            product.units_in_stock = self.units_in_stock;
        }
        if self.units_on_order.is_some() {
            product.units_on_order = self.units_on_order;
        }
        if self.reorder_level.is_some() {
            product.reorder_level = self.reorder_level;
        }
        if let Some(discontinued) = self.discontinued {
            product.discontinued = i32::from(discontinued);
        }
    }
}

pub async fn run_products(pool: &MySqlPool, args: ProductsArgs, format: Format) -> Result<()> {
    let repo = ProductRepo::new(pool);

    match args.command {
        ProductCommands::List => {
            let products = repo.get_all().await?;
            print_records(&products, format)
        }
        ProductCommands::Get(args) => match repo.find(&args.product_id).await? {
            Some(product) => print_record(&product, format),
            None => print_not_found("product", &args.product_id, format),
        },
        ProductCommands::Add(args) => {
            let mut product = Product::new(args.name);
            args.fields.apply(&mut product);
            let product = repo.add(product).await?;
            if let Some(id) = product.product_id {
                print_done(format!("added product {id}"), format);
            }
            print_record(&product, format)
        }
        ProductCommands::Update(args) => {
            let mut product = repo
                .find(&args.product_id)
                .await?
                .with_context(|| format!("product '{}' not found", args.product_id))?;
            if let Some(name) = args.name {
                product.product_name = name;
            }
            args.fields.apply(&mut product);
            repo.update(&product).await?;
            print_done(format!("updated product {}", args.product_id), format);
            print_record(&product, format)
        }
        ProductCommands::Delete(args) => {
            repo.delete(&args.product_id).await?;
            print_done(format!("deleted product {}", args.product_id), format);
            Ok(())
        }
    }
}
