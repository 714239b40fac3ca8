use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::InventoryApi;
use shelf::commands::helpers::SENTINEL_ID;
use shelf::commands::OpResult;
use shelf::model::Product;
use shelf::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let data_file = cli.file.clone().unwrap_or_else(default_data_file);
    let store = FileStore::new(data_file);
    let mut api = InventoryApi::new(store);

    match cli.command {
        Commands::Add {
            name,
            description,
            price,
            discount,
            quantity,
        } => {
            let id = api.next_id();
            if id == SENTINEL_ID {
                eprintln!(
                    "{}",
                    "Could not read the inventory file to assign an ID.".red()
                );
                std::process::exit(1);
            }

            let candidate = Product::new(id, name, description, price, discount, quantity);
            report(api.create(candidate));
        }

        Commands::List => {
            let result = api.get_products(None);
            match result.products {
                Some(products) => {
                    if products.is_empty() {
                        println!("No products yet.");
                    }
                    for product in &products {
                        print_product(product);
                    }
                }
                None => {
                    eprintln!("{}", result.message.unwrap_or_default().red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Show { id } => {
            let matches_id = move |p: &Product| p.id == id;
            let result = api.get_product(&matches_id);
            match result.product {
                Some(product) => print_product(&product),
                None => {
                    eprintln!("{}", result.message.unwrap_or_default().red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Update {
            id,
            name,
            description,
            price,
            discount,
            quantity,
        } => {
            // Overlay the provided flags on the stored record so the
            // repository still receives a full candidate.
            let matches_id = move |p: &Product| p.id == id;
            let existing = match api.get_product(&matches_id).product {
                Some(product) => product,
                None => {
                    eprintln!("{}", format!("Product with ID {} not found.", id).red());
                    std::process::exit(1);
                }
            };

            let candidate = Product::new(
                id,
                name.unwrap_or(existing.name),
                description.unwrap_or(existing.description),
                price.unwrap_or(existing.price),
                discount.unwrap_or(existing.discount),
                quantity.unwrap_or(existing.quantity),
            );
            report(api.update(id, candidate));
        }

        Commands::Delete { id } => {
            report(api.delete(id));
        }
    }
}

fn default_data_file() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "shelf", "shelf").expect("Could not determine data dir");
    proj_dirs.data_dir().join("inventory.json")
}

fn report(result: OpResult) {
    if result.success {
        println!("{}", result.message.green());
        return;
    }

    eprintln!("{}", result.message.red());
    if let Some(outcome) = result.validation {
        for error in &outcome.errors {
            eprintln!("  - {}: {}", error.field, error.message);
        }
    }
    std::process::exit(1);
}

fn print_product(product: &Product) {
    println!("{}", format!("#{} {}", product.id, product.name).bold());
    println!("  Description: {}", product.description);
    println!("  Price:       {:.2}", product.price);
    println!("  Discount:    {:.2}", product.discount);
    println!("  Final price: {:.2}", product.final_price());
    println!("  Quantity:    {}", product.quantity);
    println!(
        "  Created:     {}",
        product.created_at.format("%Y-%m-%d %H:%M")
    );
}
