use std::collections::{BTreeMap, HashMap as StdHashMap};

use excavar_blocks::{Block, BlockRegistry, Tool};
use excavar_core::{Actor, ActorId, Grid};
use excavar_geom::Cell;
use excavar_shapes::BlockSource;
use hashbrown::HashMap;

use crate::store::ChunkedStore;

const LOG_TARGET: &str = "excavar::world";

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("unknown block `{0}`")]
    UnknownBlock(String),
}

/// A block registry, the blocks placed so far, and what each actor holds.
///
/// Unset cells are air. Removing a cell wears the remover's tool by one.
pub struct VoxelWorld {
    registry: BlockRegistry,
    store: ChunkedStore,
    tools: HashMap<ActorId, Tool>,
    drops: HashMap<ActorId, BTreeMap<String, u32>>,
}

impl VoxelWorld {
    pub fn new(registry: BlockRegistry) -> Self {
        Self::with_store(registry, ChunkedStore::default())
    }

    pub fn with_store(registry: BlockRegistry, store: ChunkedStore) -> Self {
        Self {
            registry,
            store,
            tools: HashMap::new(),
            drops: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ChunkedStore {
        &self.store
    }

    pub fn block_by_name(&self, name: &str) -> Result<Block, WorldError> {
        self.block_with_props(name, None)
    }

    /// Block `name` with its state packed from `props`, e.g. a log's `axis`.
    pub fn block_with_props(
        &self,
        name: &str,
        props: Option<&StdHashMap<String, String>>,
    ) -> Result<Block, WorldError> {
        self.registry
            .make_block_by_name(name, props)
            .ok_or_else(|| WorldError::UnknownBlock(name.to_string()))
    }

    pub fn set(&mut self, cell: Cell, b: Block) {
        self.store.set(cell, b);
    }

    pub fn set_named(&mut self, cell: Cell, name: &str) -> Result<(), WorldError> {
        let b = self.block_by_name(name)?;
        self.set(cell, b);
        Ok(())
    }

    /// Fills the inclusive box spanned by `a` and `b`. Returns the cell count.
    pub fn fill_box(&mut self, a: Cell, b: Cell, block: Block) -> usize {
        let (min, max) = (
            Cell::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            Cell::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        );
        let mut n = 0;
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.store.set(Cell::new(x, y, z), block);
                    n += 1;
                }
            }
        }
        n
    }

    /// Puts `tool` in the actor's hand, returning what was held before.
    pub fn give_tool(&mut self, actor: ActorId, tool: Tool) -> Option<Tool> {
        self.tools.insert(actor, tool)
    }

    pub fn take_tool(&mut self, actor: ActorId) -> Option<Tool> {
        self.tools.remove(&actor)
    }

    pub fn tool(&self, actor: ActorId) -> Option<&Tool> {
        self.tools.get(&actor)
    }

    /// Blocks harvested by `actor` with a suitable tool, by name.
    pub fn drops(&self, actor: ActorId) -> Option<&BTreeMap<String, u32>> {
        self.drops.get(&actor)
    }

    pub fn material_name_at(&self, cell: Cell) -> String {
        self.registry.name_of(self.material_at(cell))
    }

    /// Count of stored cells equal to `b`.
    pub fn count(&self, b: Block) -> usize {
        self.store.iter().filter(|(_, x)| *x == b).count()
    }
}

impl BlockSource for VoxelWorld {
    fn material_at(&self, cell: Cell) -> Block {
        self.store.get(cell).unwrap_or_else(|| self.registry.air())
    }
}

impl Grid for VoxelWorld {
    fn is_tool_capable_for(&self, material: Block, actor: &Actor) -> bool {
        self.registry
            .is_correct_tool_for_drops(material, self.tools.get(&actor.id))
    }

    fn held_tool(&self, actor: &Actor) -> Option<&Tool> {
        self.tools.get(&actor.id)
    }

    fn remove_cell(&mut self, cell: Cell, actor: &Actor) -> bool {
        let material = self.material_at(cell);
        if self.registry.is_air(material) {
            return false;
        }
        let harvested = self.is_tool_capable_for(material, actor);
        self.store.set(cell, self.registry.air());

        if harvested {
            let name = self.registry.name_of(material);
            *self
                .drops
                .entry(actor.id)
                .or_default()
                .entry(name)
                .or_insert(0) += 1;
        }
        if !actor.unlimited_resources {
            let broke = self
                .tools
                .get_mut(&actor.id)
                .is_some_and(|t| t.apply_damage(1));
            if broke {
                if let Some(t) = self.tools.remove(&actor.id) {
                    log::info!(target: LOG_TARGET, "{} broke {}", actor.id, t.name);
                }
            }
        }
        true
    }

    fn is_empty(&self, material: Block) -> bool {
        self.registry.is_air(material)
    }

    fn material_name(&self, material: Block) -> Option<String> {
        self.registry.get(material.id).map(|ty| ty.name.clone())
    }
}
