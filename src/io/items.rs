//! Item files and pairing of items with their rectangles
//!
//! One item per line as `weight[,intensity[,label]]`. Blank lines and lines
//! starting with `#` are ignored. The weight may be signed; its magnitude is
//! what gets laid out.

use std::path::{Path, PathBuf};

use crate::geometry::rectangle::Rectangle;
use crate::io::configuration::COMMENT_PREFIX;
use crate::io::error::{Result, TreemapError, parse_error};

/// One entry of a treemap
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Signed size; the rectangle area follows its magnitude
    pub weight: f64,
    /// Signed value driving the tile colour
    pub intensity: f64,
    /// Optional display name
    pub label: Option<String>,
}

/// An item together with the rectangle laid out for it
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<'a> {
    /// Position of the item in the input
    pub index: usize,
    /// The item
    pub item: &'a Item,
    /// Its rectangle
    pub rect: Rectangle,
}

/// Parse items from text
///
/// # Errors
///
/// Returns a parse error naming `path` and the line for a missing or
/// non-numeric weight, a non-numeric intensity, or a non-finite number.
pub fn parse_items(text: &str, path: &Path) -> Result<Vec<Item>> {
    let mut items = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let mut fields = line.splitn(3, ',').map(str::trim);
        let weight = parse_number(fields.next(), "weight", path, number + 1)?
            .ok_or_else(|| parse_error(path, number + 1, &"missing weight"))?;
        let intensity = parse_number(fields.next(), "intensity", path, number + 1)?.unwrap_or(0.0);
        let label = fields
            .next()
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        items.push(Item {
            weight,
            intensity,
            label,
        });
    }

    Ok(items)
}

fn parse_number(
    field: Option<&str>,
    name: &str,
    path: &Path,
    line: usize,
) -> Result<Option<f64>> {
    let Some(text) = field.filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    let value: f64 = text
        .parse()
        .map_err(|e| parse_error(path, line, &format!("{name} '{text}': {e}")))?;
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(parse_error(path, line, &format!("{name} must be finite")))
    }
}

/// Read and parse an item file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub fn read_items(path: &Path) -> Result<Vec<Item>> {
    let text = std::fs::read_to_string(path).map_err(|e| TreemapError::FileSystem {
        path: PathBuf::from(path),
        operation: "read items",
        source: e,
    })?;
    parse_items(&text, path)
}

/// Layout weights of the items, as magnitudes of their signed weights
pub fn weights(items: &[Item]) -> Vec<f64> {
    items.iter().map(|item| item.weight.abs()).collect()
}

/// Pair every item with the rectangle at the same index
pub fn pair_tiles<'a>(items: &'a [Item], rects: &[Rectangle]) -> Vec<Tile<'a>> {
    items
        .iter()
        .zip(rects)
        .enumerate()
        .map(|(index, (item, &rect))| Tile { index, item, rect })
        .collect()
}
