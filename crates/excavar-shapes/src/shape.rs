use std::borrow::Cow;

use excavar_blocks::Block;
use excavar_geom::{Cell, Facing};

use crate::cells::CellList;

/// Read-only view of the grid, enough to test candidates against a material.
pub trait BlockSource {
    fn material_at(&self, cell: Cell) -> Block;
}

impl<F> BlockSource for F
where
    F: Fn(Cell) -> Block,
{
    fn material_at(&self, cell: Cell) -> Block {
        self(cell)
    }
}

/// A rule proposing which neighbors of a cell join the excavation.
///
/// Implementations only supply the candidate offsets; the order they are
/// returned in is the order cells are appended, so it must be fixed for a
/// given facing.
pub trait Shape: Send + Sync {
    /// Candidate offsets relative to the expanded cell, in proposal order.
    fn offsets(&self, facing: Facing) -> Cow<'_, [Cell]>;

    /// Appends matching, not yet discovered candidates around `cell` to `found`.
    ///
    /// Appends at most `budget` cells and returns `budget` minus the number
    /// appended. The grid is only read.
    fn expand(
        &self,
        grid: &dyn BlockSource,
        cell: Cell,
        facing: Facing,
        target: Block,
        found: &mut CellList,
        budget: usize,
    ) -> usize {
        let mut budget = budget;
        if budget == 0 {
            return 0;
        }
        for off in self.offsets(facing).iter() {
            // Candidates past the edge of the grid do not exist
            let Some(candidate) = cell.checked_add(*off) else {
                continue;
            };
            if found.contains(&candidate) {
                continue;
            }
            if grid.material_at(candidate) != target {
                continue;
            }
            found.push(candidate);
            budget -= 1;
            if budget == 0 {
                break;
            }
        }
        budget
    }
}
