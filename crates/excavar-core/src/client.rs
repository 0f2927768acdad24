use excavar_blocks::Block;
use excavar_geom::{Cell, Facing};
use excavar_shapes::{CellList, ShapeId, ShapeRegistry};

use crate::actor::Actor;
use crate::config::ExcavarConfig;
use crate::error::ExcavarError;
use crate::grid::Grid;
use crate::job::{Excavador, JobRequest};
use crate::session::ActorPrefs;

/// Translation key prefixed to the selected shape's description.
pub const SELECTED_KEY: &str = "excavar.shape.selected";

struct Preview {
    cell: Cell,
    facing: Facing,
    material: Block,
    shape: ShapeId,
    job: Excavador,
}

impl Preview {
    fn matches(&self, cell: Cell, facing: Facing, material: Block, shape: &ShapeId) -> bool {
        self.cell == cell && self.facing == facing && self.material == material && &self.shape == shape
    }
}

/// Local side of the trigger: shape selection, the prefs sent on press and
/// the cells that would be excavated from the cell under the cursor.
pub struct ClientController {
    shapes: ShapeRegistry,
    config: ExcavarConfig,
    trigger_down: bool,
    preview: Option<Preview>,
}

impl ClientController {
    pub fn new(config: ExcavarConfig, shapes: ShapeRegistry) -> Self {
        Self {
            shapes,
            config,
            trigger_down: false,
            preview: None,
        }
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    pub fn selected(&self) -> &ShapeId {
        self.shapes.current()
    }

    pub fn is_trigger_down(&self) -> bool {
        self.trigger_down
    }

    /// Marks the trigger as held and returns the prefs to hand to
    /// [`crate::Excavar::press`].
    pub fn press(&mut self) -> ActorPrefs {
        self.trigger_down = true;
        ActorPrefs {
            only_while_sneaking: self.config.only_while_sneaking,
            preserve_tool: self.config.prevent_tool_breaking,
            shape: self.shapes.current().clone(),
        }
    }

    pub fn release(&mut self) {
        self.trigger_down = false;
        self.preview = None;
    }

    /// Cycles the selected shape while the trigger and shift are held.
    /// Scrolling up (positive delta) goes back, anything else forward.
    ///
    /// Returns true when the selection changed, i.e. the scroll was consumed.
    pub fn scroll(&mut self, delta: f64, shift_down: bool) -> bool {
        if !self.trigger_down || !shift_down {
            return false;
        }
        let before = self.shapes.current().clone();
        let after = if delta > 0.0 {
            self.shapes.select_previous()
        } else {
            self.shapes.select_next()
        };
        *after != before
    }

    /// Description key of the selected shape, e.g. `excavar.shape.tunnel.desc`.
    pub fn selected_message_key(&self) -> String {
        self.shapes.current().description_key()
    }

    /// The `(prefix, description)` keys to show while trigger and shift are held.
    pub fn selection_message(&self, shift_down: bool) -> Option<(&'static str, String)> {
        (self.trigger_down && shift_down).then(|| (SELECTED_KEY, self.selected_message_key()))
    }

    /// Cells the selected shape would excavate from `cell`, or `None` when
    /// breaking it now would not trigger an excavation.
    ///
    /// The result is cached until the cell, facing, material or selected
    /// shape changes.
    pub fn preview<G: Grid>(
        &mut self,
        grid: &G,
        actor: &Actor,
        cell: Cell,
        facing: Facing,
        sneaking: bool,
    ) -> Result<Option<&CellList>, ExcavarError> {
        let material = grid.material_at(cell);
        let eligible = self.trigger_down
            && (sneaking || !self.config.only_while_sneaking)
            && !grid.is_empty(material)
            && self
                .config
                .is_tool_allowed(grid.held_tool(actor).map(|t| t.name.as_str()))
            && self
                .config
                .mining_allowed(grid.material_name(material).as_deref());
        if !eligible {
            self.preview = None;
            return Ok(None);
        }

        let shape = self.shapes.current();
        let stale = !self
            .preview
            .as_ref()
            .is_some_and(|p| p.matches(cell, facing, material, shape));
        if stale {
            let req = JobRequest::new(cell, actor.clone(), facing, material);
            let mut job = Excavador::new(&self.shapes, req, &self.config)?;
            job.discover_all(grid);
            self.preview = Some(Preview {
                cell,
                facing,
                material,
                shape: shape.clone(),
                job,
            });
        }
        Ok(self.preview.as_ref().map(|p| p.job.discovered_cells()))
    }
}
