use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "File-backed product inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the inventory data file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        description: String,

        /// Unit price
        #[arg(long)]
        price: f64,

        /// Discount as a fraction between 0.00 and 1.00
        #[arg(long, default_value_t = 0.0)]
        discount: f64,

        /// Units in stock
        #[arg(long, default_value_t = 0)]
        quantity: i64,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// View a single product by ID
    #[command(alias = "v")]
    Show {
        /// Product ID
        id: i64,
    },

    /// Update a product; omitted fields keep their current values
    #[command(alias = "u")]
    Update {
        /// Product ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        discount: Option<f64>,

        #[arg(long)]
        quantity: Option<i64>,
    },

    /// Delete a product by ID
    #[command(alias = "rm")]
    Delete {
        /// Product ID
        id: i64,
    },
}
