//! Plain-text layout reports

use std::borrow::Cow;
use std::io::Write;

use crate::analysis::quality::LayoutQuality;
use crate::io::items::Tile;

/// Column header written before the tile lines
pub const REPORT_HEADER: &str = "index,x1,y1,x2,y2,area,label";

/// Write one CSV line per tile after a header line
///
/// Labels containing a comma, a quote or a line break are quoted, with
/// embedded quotes doubled.
///
/// # Errors
///
/// Propagates write failures from `writer`
pub fn write_report(writer: &mut impl Write, tiles: &[Tile<'_>]) -> std::io::Result<()> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for tile in tiles {
        let rect = &tile.rect;
        writeln!(
            writer,
            "{},{:.3},{:.3},{:.3},{:.3},{:.3},{}",
            tile.index,
            rect.x1,
            rect.y1,
            rect.x2,
            rect.y2,
            rect.area(),
            csv_field(tile.item.label.as_deref().unwrap_or_default())
        )?;
    }
    Ok(())
}

fn csv_field(text: &str) -> Cow<'_, str> {
    if text.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}

/// Write a short quality summary
///
/// # Errors
///
/// Propagates write failures from `writer`
pub fn write_quality(writer: &mut impl Write, quality: &LayoutQuality) -> std::io::Result<()> {
    writeln!(writer, "rectangles: {}", quality.count)?;
    writeln!(writer, "total area: {:.3}", quality.total_area)?;
    writeln!(writer, "mean aspect ratio: {:.3}", quality.mean_aspect_ratio)?;
    writeln!(writer, "worst aspect ratio: {:.3}", quality.worst_aspect_ratio)?;
    writeln!(writer, "degenerate: {}", quality.degenerate)
}
