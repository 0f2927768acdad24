use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlocksConfig, HarvestDef};
use super::types::{Block, BlockId, BlockState, Tool, ToolKind};

#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub air_id: BlockId,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            by_name: HashMap::new(),
            air_id: 0,
        }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn air(&self) -> Block {
        Block {
            id: self.air_id,
            state: 0,
        }
    }

    #[inline]
    pub fn is_air(&self, b: Block) -> bool {
        b.id == self.air_id
    }

    /// Human readable name, `#<id>` for ids the registry does not know.
    pub fn name_of(&self, b: Block) -> String {
        match self.get(b.id) {
            Some(ty) if !ty.name.is_empty() => ty.name.clone(),
            _ => format!("#{}", b.id),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_configs(cfg)
    }

    pub fn load_from_path(blocks_path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let blocks_toml = fs::read_to_string(blocks_path)?;
        Self::from_toml_str(&blocks_toml)
    }

    pub fn from_configs(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::new();
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            let solid = def.solid.unwrap_or(true);
            let harvest = match def.harvest {
                None => None,
                Some(HarvestDef::Simple(tool)) => Some(Harvest {
                    tool: parse_tool_kind(&def.name, &tool)?,
                    tier: 0,
                }),
                Some(HarvestDef::Detailed { tool, tier }) => Some(Harvest {
                    tool: parse_tool_kind(&def.name, &tool)?,
                    tier,
                }),
            };
            let state_schema = def.state_schema.unwrap_or_default();
            let (state_fields, prop_index) = compute_state_layout(&state_schema);
            let state_bits: u32 = state_fields.iter().map(|f| f.bits).sum();
            if state_bits > BlockState::BITS {
                return Err(format!(
                    "block `{}`: state schema needs {} bits, at most {} fit",
                    def.name,
                    state_bits,
                    BlockState::BITS
                )
                .into());
            }
            let ty = BlockType {
                id,
                name: def.name,
                solid,
                harvest,
                state_schema,
                state_fields,
                prop_index,
            };
            if reg.blocks.len() <= id as usize {
                reg.blocks
                    .resize(id as usize + 1, BlockType::placeholder(id));
            }
            if !reg.blocks[id as usize].name.is_empty() {
                return Err(format!(
                    "block id {} is used by both `{}` and `{}`",
                    id, reg.blocks[id as usize].name, ty.name
                )
                .into());
            }
            reg.blocks[id as usize] = ty;
        }
        reg.by_name = reg
            .blocks
            .iter()
            .filter(|t| !t.name.is_empty())
            .map(|t| (t.name.clone(), t.id))
            .collect();
        reg.air_id = cfg
            .air_block
            .as_deref()
            .and_then(|n| reg.id_by_name(n))
            .or_else(|| reg.id_by_name("air"))
            .unwrap_or(0);
        Ok(reg)
    }

    pub fn make_block_by_name(
        &self,
        name: &str,
        props: Option<&HashMap<String, String>>,
    ) -> Option<Block> {
        let id = self.id_by_name(name)?;
        let state = if let Some(p) = props {
            self.get(id).map(|ty| ty.pack_state(p)).unwrap_or(0)
        } else {
            0
        };
        Some(Block { id, state })
    }

    /// Whether breaking `b` with `tool` (or bare hands) would produce drops.
    pub fn is_correct_tool_for_drops(&self, b: Block, tool: Option<&Tool>) -> bool {
        self.get(b.id)
            .map(|ty| ty.is_correct_tool(tool))
            .unwrap_or(true)
    }
}

fn parse_tool_kind(block: &str, tool: &str) -> Result<ToolKind, Box<dyn Error>> {
    ToolKind::from_name(tool)
        .ok_or_else(|| format!("block `{}`: unknown harvest tool `{}`", block, tool).into())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Harvest {
    pub tool: ToolKind,
    pub tier: u8,
}

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub harvest: Option<Harvest>,
    pub state_schema: HashMap<String, Vec<String>>, // property name -> allowed values
    // Precomputed, sorted layout for fast state packing/unpacking
    pub state_fields: Vec<StateField>,
    pub prop_index: HashMap<String, usize>,
}

impl BlockType {
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            solid: false,
            harvest: None,
            state_schema: HashMap::new(),
            state_fields: Vec::new(),
            prop_index: HashMap::new(),
        }
    }

    pub fn is_solid(&self, _state: BlockState) -> bool {
        self.solid
    }

    pub fn is_correct_tool(&self, tool: Option<&Tool>) -> bool {
        let Some(req) = self.harvest else {
            return true;
        };
        match tool {
            Some(t) if !t.is_broken() => t.kind == req.tool && t.tier >= req.tier,
            _ => false,
        }
    }

    /// Value of `prop` encoded in `state`, `None` for unknown properties.
    pub fn state_prop_value<'a>(&'a self, state: BlockState, prop: &str) -> Option<&'a str> {
        let field = self.state_fields.get(*self.prop_index.get(prop)?)?;
        let idx = (u32::from(state) >> field.offset) & field.mask();
        field.values.get(idx as usize).map(String::as_str)
    }

    /// Encodes `props` into a state. Missing or unknown values select the
    /// first allowed value of their property.
    pub fn pack_state(&self, props: &HashMap<String, String>) -> BlockState {
        let packed = self
            .state_fields
            .iter()
            .filter(|f| f.bits > 0)
            .fold(0u32, |acc, f| {
                let idx = props
                    .get(&f.name)
                    .and_then(|v| f.values.iter().position(|s| s == v))
                    .unwrap_or(0) as u32;
                acc | ((idx & f.mask()) << f.offset)
            });
        packed as BlockState
    }
}

/// One property's slice of the packed state.
#[derive(Clone, Debug)]
pub struct StateField {
    pub name: String,
    pub values: Vec<String>,
    pub bits: u32,
    pub offset: u32,
}

impl StateField {
    #[inline]
    fn mask(&self) -> u32 {
        match self.bits {
            0 => 0,
            b if b >= 32 => u32::MAX,
            b => (1u32 << b) - 1,
        }
    }
}

/// Lays properties out in name order, each taking just enough bits for its values.
fn compute_state_layout(
    schema: &HashMap<String, Vec<String>>,
) -> (Vec<StateField>, HashMap<String, usize>) {
    let mut names: Vec<&String> = schema.keys().collect();
    names.sort();
    let mut offset = 0u32;
    let fields: Vec<StateField> = names
        .into_iter()
        .map(|name| {
            let values = schema[name].clone();
            let bits = match values.len() as u32 {
                0 | 1 => 0,
                n => u32::BITS - (n - 1).leading_zeros(),
            };
            let field = StateField {
                name: name.clone(),
                values,
                bits,
                offset,
            };
            offset = offset.saturating_add(bits);
            field
        })
        .collect();
    let index = fields
        .iter()
        .enumerate()
        .map(|(i, f)| (f.name.clone(), i))
        .collect();
    (fields, index)
}
