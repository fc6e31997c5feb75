use log::trace;

use crate::model::{HistoryEntry, RenderablePipeline, RunResult};
use crate::surface::{Rect, Size, Surface, Tone};

/// Pipelines per column when the caller does not override the column count.
const PIPELINES_PER_COLUMN: usize = 6;

/// Caption offset from a tile's top-left corner, in surface units.
const TEXT_INSET_X: f64 = 1.0;
const TEXT_INSET_Y: f64 = 1.0;

/// Grid dimensions for a pipeline count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
}

/// One tile of the board, recomputed on every draw and never mutated.
/// Cells without a label are unoccupied background tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub fill: Tone,
    pub label: Option<String>,
}

/// Computes the grid dimensions for `pipeline_count` tiles.
///
/// A positive `column_override` wins; otherwise one column is allocated per
/// six pipelines, with a minimum of one column. Rows always cover the full
/// count, so `columns * rows >= pipeline_count`.
pub fn compute_layout(pipeline_count: usize, column_override: Option<usize>) -> GridGeometry {
    let columns = match column_override {
        Some(columns) if columns > 0 => columns,
        _ => pipeline_count.div_ceil(PIPELINES_PER_COLUMN).max(1),
    };
    let rows = pipeline_count.div_ceil(columns);

    GridGeometry { columns, rows }
}

/// Maps a pipeline's history onto a tile fill.
///
/// Total: only a most-recent `Passed` or `Failed` picks a verdict color,
/// everything else (unknown result, empty or missing history) is `Pending`.
pub fn tone_of(histories: &[HistoryEntry]) -> Tone {
    match histories.first().map(|entry| entry.result) {
        Some(RunResult::Passed) => Tone::Success,
        Some(RunResult::Failed) => Tone::Failure,
        _ => Tone::Pending,
    }
}

/// Lays out pipelines onto a surface of the given size.
///
/// Assignment is column-major: the cell at column `i`, row `j` holds the
/// pipeline at index `i * rows + j`, so a column fills top to bottom before
/// the next column starts. Pure and deterministic.
pub fn layout_cells(
    size: Size,
    pipelines: &[RenderablePipeline],
    column_override: Option<usize>,
) -> Vec<GridCell> {
    if pipelines.is_empty() {
        return Vec::new();
    }

    let geometry = compute_layout(pipelines.len(), column_override);
    let tile_width = size.width / geometry.columns as f64;
    let tile_height = size.height / geometry.rows as f64;

    let mut cells = Vec::with_capacity(geometry.columns * geometry.rows);
    for column in 0..geometry.columns {
        for row in 0..geometry.rows {
            let slot = column * geometry.rows + row;
            let rect = Rect {
                x: column as f64 * tile_width,
                y: row as f64 * tile_height,
                width: tile_width,
                height: tile_height,
            };

            let cell = match pipelines.get(slot) {
                Some(pipeline) => GridCell {
                    column,
                    row,
                    rect,
                    fill: tone_of(&pipeline.histories),
                    label: Some(pipeline.name.clone()),
                },
                None => GridCell {
                    column,
                    row,
                    rect,
                    fill: Tone::Background,
                    label: None,
                },
            };
            cells.push(cell);
        }
    }

    cells
}

/// Redraws the whole board onto `surface`.
///
/// The surface is resized to the current viewport first so window size
/// changes take effect on the next cycle. Occupied tiles get a fill, a
/// border, and the pipeline name near the top-left corner; surplus tiles
/// are painted as plain background.
pub fn draw(
    surface: &mut dyn Surface,
    pipelines: &[RenderablePipeline],
    column_override: Option<usize>,
) {
    let viewport = surface.viewport();
    surface.resize(viewport);

    for cell in layout_cells(viewport, pipelines, column_override) {
        trace!("tile ({}, {}) -> {:?}", cell.column, cell.row, cell.fill);
        surface.fill_rect(cell.rect, cell.fill);

        if let Some(label) = &cell.label {
            surface.stroke_rect(cell.rect, Tone::Outline);
            surface.fill_text(
                label,
                cell.rect.x + TEXT_INSET_X,
                cell.rect.y + TEXT_INSET_Y,
                Tone::Label,
            );
        }
    }
}
