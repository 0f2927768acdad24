//! Hand-authored test scenes: a few boxes of blocks and one actor.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use excavar_blocks::Tool;
use excavar_core::Actor;
use excavar_geom::Cell;
use excavar_world::{VoxelWorld, WorldError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub fill: Vec<FillDef>,
    #[serde(default)]
    pub set: Vec<SetDef>,
    #[serde(default)]
    pub actor: ActorDef,
}

/// Inclusive box of one block.
#[derive(Clone, Debug, Deserialize)]
pub struct FillDef {
    pub min: [i32; 3],
    pub max: [i32; 3],
    pub block: String,
    #[serde(default)]
    pub props: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SetDef {
    pub at: [i32; 3],
    pub block: String,
    #[serde(default)]
    pub props: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActorDef {
    #[serde(default = "default_actor_id")]
    pub id: u64,
    #[serde(default)]
    pub unlimited_resources: bool,
    #[serde(default)]
    pub tool: Option<Tool>,
}

fn default_actor_id() -> u64 {
    1
}

impl Default for ActorDef {
    fn default() -> Self {
        Self {
            id: default_actor_id(),
            unlimited_resources: false,
            tool: None,
        }
    }
}

impl Scene {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Places fills in order, then single cells, then hands out the tool.
    pub fn apply(&self, world: &mut VoxelWorld) -> Result<Actor, WorldError> {
        for f in &self.fill {
            let b = world.block_with_props(&f.block, f.props.as_ref())?;
            world.fill_box(Cell::from(f.min), Cell::from(f.max), b);
        }
        for s in &self.set {
            let b = world.block_with_props(&s.block, s.props.as_ref())?;
            world.set(Cell::from(s.at), b);
        }
        let actor = Actor::server(self.actor.id)
            .with_unlimited_resources(self.actor.unlimited_resources);
        if let Some(tool) = &self.actor.tool {
            world.give_tool(actor.id, tool.clone());
        }
        Ok(actor)
    }
}
