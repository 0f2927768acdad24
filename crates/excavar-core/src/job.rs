//! A single excavation: discover the connected cells once, then remove them.

use std::fmt;
use std::sync::Arc;

use excavar_blocks::Block;
use excavar_geom::{Cell, Facing};
use excavar_shapes::{CellList, Shape, ShapeId, ShapeRegistry};
use hashbrown::HashSet;

use crate::actor::Actor;
use crate::config::ExcavarConfig;
use crate::error::ExcavarError;
use crate::grid::Grid;

const LOG_TARGET: &str = "excavar";

/// Which registry entry drives expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ShapeChoice {
    /// Whatever the registry has selected when the job is built.
    #[default]
    Selected,
    Id(ShapeId),
}

/// Parameters for [`Excavador::new`]. Unset flags fall back to the config.
#[derive(Clone, Debug)]
pub struct JobRequest {
    pub start: Cell,
    pub actor: Actor,
    pub facing: Facing,
    pub target: Block,
    pub shape: ShapeChoice,
    pub requires_capable_tool: Option<bool>,
    pub preserve_tool: Option<bool>,
}

impl JobRequest {
    pub fn new(start: Cell, actor: Actor, facing: Facing, target: Block) -> Self {
        Self {
            start,
            actor,
            facing,
            target,
            shape: ShapeChoice::Selected,
            requires_capable_tool: None,
            preserve_tool: None,
        }
    }

    pub fn shape(mut self, id: ShapeId) -> Self {
        self.shape = ShapeChoice::Id(id);
        self
    }

    pub fn requires_capable_tool(mut self, yes: bool) -> Self {
        self.requires_capable_tool = Some(yes);
        self
    }

    pub fn preserve_tool(mut self, yes: bool) -> Self {
        self.preserve_tool = Some(yes);
        self
    }
}

/// Why discovery stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// The held tool cannot harvest the start cell; only the start was listed.
    IncapableTool,
    BudgetExhausted,
    FrontierExhausted,
}

impl DiscoveryOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscoveryOutcome::IncapableTool => "gate",
            DiscoveryOutcome::BudgetExhausted => "budget",
            DiscoveryOutcome::FrontierExhausted => "frontier",
        }
    }
}

impl fmt::Display for DiscoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Completed,
    /// The next removal could break the held tool.
    ToolProtected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumeReport {
    /// Cells handed to the grid for removal.
    pub processed: usize,
    /// Cells the grid actually removed.
    pub removed: usize,
    pub stop: StopReason,
}

/// One excavation job.
///
/// The cell list is filled by the first call to [`Excavador::discover`] and is
/// final afterwards. Holds no reference to the grid; every operation takes it
/// as an argument.
pub struct Excavador {
    start: Cell,
    actor: Actor,
    facing: Facing,
    target: Block,
    shape_id: ShapeId,
    shape: Arc<dyn Shape>,
    block_limit: usize,
    requires_capable_tool: bool,
    preserve_tool: bool,
    cells: CellList,
    outcome: Option<DiscoveryOutcome>,
}

impl Excavador {
    /// Resolves the shape and snapshots the config. Fails before touching any
    /// grid if the shape id is unknown.
    pub fn new(
        registry: &ShapeRegistry,
        req: JobRequest,
        config: &ExcavarConfig,
    ) -> Result<Self, ExcavarError> {
        let (shape_id, shape) = match req.shape {
            ShapeChoice::Selected => (registry.current().clone(), registry.current_shape()),
            ShapeChoice::Id(id) => {
                let shape = registry.get(&id)?;
                (id, shape)
            }
        };
        Ok(Self {
            start: req.start,
            actor: req.actor,
            facing: req.facing,
            target: req.target,
            shape_id,
            shape,
            block_limit: config.block_limit,
            requires_capable_tool: req
                .requires_capable_tool
                .unwrap_or(config.requires_correct_tool),
            preserve_tool: req.preserve_tool.unwrap_or(config.prevent_tool_breaking),
            cells: CellList::new(),
            outcome: None,
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn target(&self) -> Block {
        self.target
    }

    pub fn shape_id(&self) -> &ShapeId {
        &self.shape_id
    }

    pub fn preserve_tool(&self) -> bool {
        self.preserve_tool
    }

    pub fn discovered_cells(&self) -> &CellList {
        &self.cells
    }

    /// `None` until discovery has run.
    pub fn outcome(&self) -> Option<DiscoveryOutcome> {
        self.outcome
    }

    /// Fills the cell list, listing at most `max(1, min(requested_max,
    /// block_limit))` cells. Runs once; later calls return the first outcome.
    ///
    /// Expansion is breadth-first in list order: the next cell expanded is
    /// always the earliest listed cell not yet expanded. Cells expanded so far
    /// are therefore a prefix of the list and a cursor finds the next one.
    pub fn discover<G: Grid>(&mut self, grid: &G, requested_max: usize) -> DiscoveryOutcome {
        if let Some(done) = self.outcome {
            return done;
        }

        self.cells.push(self.start);
        if self.requires_capable_tool {
            let material = grid.material_at(self.start);
            if !grid.is_tool_capable_for(material, &self.actor) {
                return self.finish(DiscoveryOutcome::IncapableTool);
            }
        }

        let mut budget = requested_max.min(self.block_limit).max(1) - 1;
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut cursor = 0;
        let outcome = loop {
            if budget == 0 {
                break DiscoveryOutcome::BudgetExhausted;
            }
            while self.cells.get(cursor).is_some_and(|c| visited.contains(&c)) {
                cursor += 1;
            }
            let Some(cell) = self.cells.get(cursor) else {
                break DiscoveryOutcome::FrontierExhausted;
            };
            visited.insert(cell);
            budget = self.shape.expand(
                grid,
                cell,
                self.facing,
                self.target,
                &mut self.cells,
                budget,
            );
        };
        self.finish(outcome)
    }

    pub fn discover_all<G: Grid>(&mut self, grid: &G) -> DiscoveryOutcome {
        self.discover(grid, usize::MAX)
    }

    fn finish(&mut self, outcome: DiscoveryOutcome) -> DiscoveryOutcome {
        self.outcome = Some(outcome);
        log::debug!(
            target: LOG_TARGET,
            "{} at {} with {}: {} cells (stopped by {})",
            self.actor.id,
            self.start,
            self.shape_id,
            self.cells.len(),
            outcome
        );
        outcome
    }

    /// Removes the discovered cells in list order on behalf of the actor.
    ///
    /// Before each removal the held tool is re-read. The loop stops once a
    /// depletable tool has at most one use left (two with preserve-tool),
    /// unless the actor has unlimited resources.
    pub fn consume<G: Grid>(&self, grid: &mut G) -> Result<ConsumeReport, ExcavarError> {
        if !self.actor.is_authoritative() {
            return Err(ExcavarError::IllegitimateContext);
        }
        let stop_at = if self.preserve_tool { 2 } else { 1 };
        let mut processed = 0;
        let mut removed = 0;
        let mut stop = StopReason::Completed;
        for cell in self.cells.iter() {
            let protect = !self.actor.unlimited_resources
                && grid
                    .held_tool(&self.actor)
                    .is_some_and(|t| t.is_depletable() && t.remaining() <= stop_at);
            if protect {
                log::info!(
                    target: LOG_TARGET,
                    "{} stopped after {} of {} cells to keep their tool intact",
                    self.actor.id,
                    processed,
                    self.cells.len()
                );
                stop = StopReason::ToolProtected;
                break;
            }
            processed += 1;
            if grid.remove_cell(cell, &self.actor) {
                removed += 1;
                log::trace!(target: LOG_TARGET, "removed {cell}");
            }
        }
        Ok(ConsumeReport {
            processed,
            removed,
            stop,
        })
    }
}

impl fmt::Debug for Excavador {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Excavador")
            .field("start", &self.start)
            .field("actor", &self.actor.id)
            .field("facing", &self.facing)
            .field("target", &self.target)
            .field("shape", &self.shape_id)
            .field("cells", &self.cells.len())
            .field("outcome", &self.outcome)
            .finish()
    }
}
