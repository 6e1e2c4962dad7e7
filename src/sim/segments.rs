//! Run-length compression of the wall's visual state.
//!
//! Draw output scales with visual complexity instead of cell count: a fully
//! intact (or fully destroyed) wall compresses to one segment per column,
//! and the worst case is one segment per block.

use serde::{Deserialize, Serialize};

use super::block::VisualState;
use super::grid::Grid;

/// One draw instruction: a vertical run of blocks sharing visual state
/// within a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub column: u32,
    pub row_start: u32,
    pub len: u32,
    pub state: VisualState,
}

/// Walk the grid in storage order (column-major) and emit maximal runs of
/// contiguous same-state blocks. A run closes when the state key changes or
/// the walk wraps to the next column's top row; the trailing run is flushed
/// at the end.
pub fn compress(grid: &Grid) -> Vec<Segment> {
    let mut out = Vec::with_capacity(grid.width() as usize);
    let mut run: Option<Segment> = None;

    for block in grid.blocks() {
        let state = block.visual_state();
        let extends = matches!(&run, Some(r) if r.column == block.x && r.state == state);
        if extends {
            if let Some(r) = run.as_mut() {
                r.len += 1;
            }
        } else {
            if let Some(r) = run.take() {
                out.push(r);
            }
            run = Some(Segment {
                column: block.x,
                row_start: block.y,
                len: 1,
                state,
            });
        }
    }
    if let Some(r) = run {
        out.push(r);
    }
    out
}
