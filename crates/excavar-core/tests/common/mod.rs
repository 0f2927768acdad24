#![allow(dead_code)]

use std::collections::HashMap;

use excavar_blocks::{Block, Tool, ToolKind};
use excavar_core::{Actor, Grid};
use excavar_geom::Cell;
use excavar_shapes::BlockSource;

pub const STONE: Block = Block::new(1, 0);
pub const ORE: Block = Block::new(2, 0);
pub const LOG: Block = Block::new(3, 0);

/// Sparse grid with a single held tool shared by every actor.
#[derive(Debug, Default)]
pub struct TestGrid {
    pub blocks: HashMap<Cell, Block>,
    pub tool: Option<Tool>,
    pub capable: bool,
    pub removed: Vec<Cell>,
    pub names: HashMap<Block, String>,
}

impl TestGrid {
    pub fn new() -> Self {
        Self {
            capable: true,
            ..Self::default()
        }
    }

    pub fn set(&mut self, c: Cell, b: Block) {
        self.blocks.insert(c, b);
    }

    pub fn fill(&mut self, min: Cell, max: Cell, b: Block) {
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.set(Cell::new(x, y, z), b);
                }
            }
        }
    }

    pub fn with_tool(mut self, max_damage: u32, damage: u32) -> Self {
        self.tool = Some(
            Tool::new("iron_pickaxe", ToolKind::Pickaxe, 2, max_damage).with_damage(damage),
        );
        self
    }

    pub fn tool_damage(&self) -> u32 {
        self.tool.as_ref().map_or(0, |t| t.damage)
    }
}

impl BlockSource for TestGrid {
    fn material_at(&self, cell: Cell) -> Block {
        self.blocks.get(&cell).copied().unwrap_or(Block::AIR)
    }
}

impl Grid for TestGrid {
    fn is_tool_capable_for(&self, _material: Block, _actor: &Actor) -> bool {
        self.capable
    }

    fn held_tool(&self, _actor: &Actor) -> Option<&Tool> {
        self.tool.as_ref()
    }

    fn remove_cell(&mut self, cell: Cell, actor: &Actor) -> bool {
        match self.blocks.remove(&cell) {
            Some(b) if !b.is_air() => {
                if !actor.unlimited_resources {
                    if let Some(t) = self.tool.as_mut() {
                        t.apply_damage(1);
                    }
                }
                self.removed.push(cell);
                true
            }
            _ => false,
        }
    }

    fn material_name(&self, material: Block) -> Option<String> {
        self.names.get(&material).cloned()
    }
}
