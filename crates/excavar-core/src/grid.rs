use excavar_blocks::{Block, Tool};
use excavar_geom::Cell;
use excavar_shapes::BlockSource;

use crate::actor::Actor;

/// The world as seen by an excavation.
///
/// Discovery only reads through [`BlockSource::material_at`] and
/// [`Grid::is_tool_capable_for`]. Consumption calls [`Grid::remove_cell`],
/// which is expected to apply tool wear itself.
pub trait Grid: BlockSource {
    /// Whether `actor`'s held tool would make `material` produce drops.
    fn is_tool_capable_for(&self, material: Block, actor: &Actor) -> bool;

    fn held_tool(&self, actor: &Actor) -> Option<&Tool>;

    /// Breaks `cell` on behalf of `actor`. Returns false if nothing was removed.
    fn remove_cell(&mut self, cell: Cell, actor: &Actor) -> bool;

    /// Whether `material` counts as an empty cell. The default only knows
    /// [`Block::AIR`] (id 0); grids whose registry maps air elsewhere must
    /// override it.
    fn is_empty(&self, material: Block) -> bool {
        material.is_air()
    }

    /// Registry name of `material`, when the grid knows one.
    fn material_name(&self, _material: Block) -> Option<String> {
        None
    }
}
