//! Container packing CLI.
//!
//! Loads a container descriptor and item-type records from TSV files,
//! packs the expanded items, settles them, and prints the summary.

mod loader;

use clap::Parser;
use std::path::PathBuf;
use stowage::{settle, ItemType, PackConfig, PlacementEngine};

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Packs box items into a container and settles them under gravity")]
#[command(version)]
struct Cli {
    /// Path to the container TSV file (ID, Width, Height, Depth, MaxWeight)
    #[arg(short, long, default_value = "Container.tsv")]
    container: PathBuf,

    /// Path to the item-types TSV file (Type, Width, Height, Depth, Weight, Quantity[, Color])
    #[arg(short, long, default_value = "Bins.tsv")]
    items: PathBuf,

    /// Pack items in input order instead of largest vertical extent first
    #[arg(long)]
    input_order: bool,

    /// Spread placements across the container floor instead of packing
    /// tightly against one corner
    #[arg(long)]
    distribute: bool,

    /// Decimal places used in dimension comparisons
    #[arg(long, default_value = "6")]
    precision: u32,

    /// Include per-item positions and rotations in the summary
    #[arg(long)]
    positions: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let container = loader::load_container(&cli.container)?;
    if let Err(e) = container.validate() {
        log::warn!("{e}; packing will fit nothing");
    }

    let types = loader::load_item_types(&cli.items)?;
    let items: Vec<_> = types.iter().flat_map(ItemType::expand).collect();
    log::info!(
        "loaded container '{}' and {} items of {} types",
        container.id,
        items.len(),
        types.len()
    );

    println!("Container: {}", container.id);
    println!(
        "  Dimensions: {} x {} x {}",
        container.width, container.height, container.depth
    );
    println!("  Max Weight: {}", container.max_weight);

    let config = PackConfig::default()
        .with_bigger_first(!cli.input_order)
        .with_distribute(cli.distribute)
        .with_precision(cli.precision);
    let engine = PlacementEngine::new(config);

    let mut result = engine.pack(&container, items);
    settle(&mut result.fitted);

    println!();
    println!("{}", result.summary(cli.positions));

    Ok(())
}
