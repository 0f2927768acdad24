use serde::Deserialize;
use std::collections::HashMap;

// Top-level blocks config file
#[derive(Deserialize, Debug, Default)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
    // Optional name of the block that stands for empty space. Falls back to `air`,
    // then to id 0.
    #[serde(default)]
    pub air_block: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub solid: Option<bool>,

    // What is needed for the block to produce drops when broken
    #[serde(default)]
    pub harvest: Option<HarvestDef>,

    #[serde(default)]
    pub state_schema: Option<HashMap<String, Vec<String>>>,
}

impl BlockDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            solid: None,
            harvest: None,
            state_schema: None,
        }
    }
}

// Harvest requirement supports either a bare tool name ("pickaxe") or a table
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum HarvestDef {
    Simple(String),
    Detailed {
        tool: String,
        #[serde(default)]
        tier: u8,
    },
}
