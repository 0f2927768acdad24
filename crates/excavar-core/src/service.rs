use excavar_geom::{Cell, Facing};
use excavar_shapes::ShapeRegistry;

use crate::actor::{Actor, ActorId};
use crate::config::ExcavarConfig;
use crate::error::ExcavarError;
use crate::grid::Grid;
use crate::job::{ConsumeReport, Excavador, JobRequest};
use crate::session::{ActorPrefs, SessionStore};

const LOG_TARGET: &str = "excavar";

/// Authoritative-side glue: tracks who holds the trigger and turns their
/// break actions into excavations.
#[derive(Debug, Default)]
pub struct Excavar {
    config: ExcavarConfig,
    shapes: ShapeRegistry,
    sessions: SessionStore,
}

impl Excavar {
    pub fn new(config: ExcavarConfig, shapes: ShapeRegistry) -> Self {
        Self {
            config,
            shapes,
            sessions: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &ExcavarConfig {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeRegistry {
        &mut self.shapes
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn press(&mut self, actor: ActorId, prefs: ActorPrefs) {
        log::debug!(target: LOG_TARGET, "{actor} pressed with {}", prefs.shape);
        self.sessions.press(actor, prefs);
    }

    pub fn release(&mut self, actor: ActorId) {
        if self.sessions.release(actor).is_some() {
            log::debug!(target: LOG_TARGET, "{actor} released");
        }
    }

    /// Called when `actor` breaks `cell`. The cell must still hold its
    /// material; it is the first one the excavation removes.
    ///
    /// Returns `Ok(None)` when no excavation applies: the actor is not
    /// holding the trigger, is required to sneak and is not, the cell is
    /// empty, or the held tool or the block is excluded by config.
    pub fn on_cell_broken<G: Grid>(
        &self,
        grid: &mut G,
        actor: &Actor,
        cell: Cell,
        facing: Facing,
        sneaking: bool,
    ) -> Result<Option<ConsumeReport>, ExcavarError> {
        let Some(prefs) = self.sessions.get(actor.id) else {
            return Ok(None);
        };
        if prefs.only_while_sneaking && !sneaking {
            return Ok(None);
        }
        let target = grid.material_at(cell);
        if grid.is_empty(target) {
            return Ok(None);
        }
        let tool = grid.held_tool(actor).map(|t| t.name.as_str());
        if !self.config.is_tool_allowed(tool) {
            log::debug!(target: LOG_TARGET, "{} holds a tool excluded by config", actor.id);
            return Ok(None);
        }
        let name = grid.material_name(target);
        if !self.config.mining_allowed(name.as_deref()) {
            log::debug!(target: LOG_TARGET, "{name:?} is excluded by config");
            return Ok(None);
        }

        let req = JobRequest::new(cell, actor.clone(), facing, target)
            .shape(prefs.shape.clone())
            .preserve_tool(prefs.preserve_tool);
        let mut job = Excavador::new(&self.shapes, req, &self.config)?;
        job.discover_all(&*grid);
        job.consume(grid).map(Some)
    }
}
