//! TSV loaders for container and item-type records.
//!
//! Malformed records (missing columns, non-numeric fields) fail fast
//! before any packing attempt; no partially-built container or item list
//! escapes a loader.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use stowage::{Container, Error, ItemType, Result};

#[derive(Debug, Deserialize)]
struct ContainerRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Width")]
    width: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Depth")]
    depth: f64,
    #[serde(rename = "MaxWeight")]
    max_weight: f64,
}

#[derive(Debug, Deserialize)]
struct ItemTypeRecord {
    #[serde(rename = "Type")]
    type_name: String,
    #[serde(rename = "Width")]
    width: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Depth")]
    depth: f64,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Color", default)]
    color: Option<String>,
}

fn tsv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(text.as_bytes())
}

/// Parses the container descriptor from the first record of a TSV
/// document.
pub fn parse_container(text: &str) -> Result<Container> {
    let mut reader = tsv_reader(text);
    let record: ContainerRecord = reader
        .deserialize()
        .next()
        .ok_or_else(|| Error::DataFormat("container file has no records".into()))?
        .map_err(|e| Error::DataFormat(e.to_string()))?;

    Ok(Container::new(
        record.id,
        record.width,
        record.height,
        record.depth,
        record.max_weight,
    ))
}

/// Parses item-type records from a TSV document.
pub fn parse_item_types(text: &str) -> Result<Vec<ItemType>> {
    let mut reader = tsv_reader(text);
    let mut types = Vec::new();
    for record in reader.deserialize() {
        let record: ItemTypeRecord = record.map_err(|e| Error::DataFormat(e.to_string()))?;
        let mut item_type = ItemType::new(
            record.type_name,
            record.width,
            record.height,
            record.depth,
            record.weight,
            record.quantity,
        );
        if let Some(color) = record.color {
            item_type = item_type.with_color(color);
        }
        types.push(item_type);
    }
    Ok(types)
}

/// Loads the container descriptor from a TSV file.
pub fn load_container(path: impl AsRef<Path>) -> Result<Container> {
    let text = fs::read_to_string(path)?;
    parse_container(&text)
}

/// Loads item-type records from a TSV file.
pub fn load_item_types(path: impl AsRef<Path>) -> Result<Vec<ItemType>> {
    let text = fs::read_to_string(path)?;
    parse_item_types(&text)
}
