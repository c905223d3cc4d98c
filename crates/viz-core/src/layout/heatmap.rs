// File: crates/viz-core/src/layout/heatmap.rs
// Summary: Heatmap grid over the row x column product with an auto color scale.

use crate::color::{ColorScale, Palette};
use crate::data::HeatCell;
use crate::scale::BandScale;
use crate::scene::{Enter, Mark};

/// Unique row and column labels in first-appearance order.
pub fn axes_labels(cells: &[HeatCell]) -> (Vec<String>, Vec<String>) {
    let mut rows: Vec<String> = Vec::new();
    let mut cols: Vec<String> = Vec::new();
    for cell in cells {
        if !rows.iter().any(|r| r == &cell.row) {
            rows.push(cell.row.clone());
        }
        if !cols.iter().any(|c| c == &cell.col) {
            cols.push(cell.col.clone());
        }
    }
    (rows, cols)
}

/// One rect per (row, column) pair in the Cartesian product. Pairs absent
/// from the data, and cells with a null value, use the empty-cell color.
#[allow(clippy::too_many_arguments)]
pub fn layout(
    cells: &[HeatCell],
    rows: &[String],
    cols: &[String],
    row_band: &BandScale,
    col_band: &BandScale,
    scale: &ColorScale,
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(rows.len() * cols.len());
    for (ri, row) in rows.iter().enumerate() {
        for (ci, col) in cols.iter().enumerate() {
            let found = cells
                .iter()
                .enumerate()
                .find(|(_, c)| &c.row == row && &c.col == col);
            let (fill, key) = match found {
                Some((i, cell)) => (
                    scale
                        .color_of(cell.value)
                        .unwrap_or_else(|| palette.empty_cell.to_string()),
                    Some(cell.datum.key(i)),
                ),
                None => (palette.empty_cell.to_string(), None),
            };
            marks.push(Mark::Rect {
                x: col_band.position(ci),
                y: row_band.position(ri),
                width: col_band.bandwidth(),
                height: row_band.bandwidth(),
                fill,
                opacity: 1.0,
                key,
                enter,
            });
        }
    }
    marks
}
