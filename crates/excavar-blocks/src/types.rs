use serde::{Deserialize, Serialize};
use std::fmt;

// Compact voxel representation; doubles as the material descriptor for matching.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

pub type BlockId = u16;
pub type BlockState = u16;

impl Block {
    pub const AIR: Block = Block { id: 0, state: 0 };

    #[inline]
    pub const fn new(id: BlockId, state: BlockState) -> Self {
        Self { id, state }
    }

    /// True only for [`Block::AIR`]. Registries may name a different air
    /// block; ask `BlockRegistry::is_air` when one is at hand.
    #[inline]
    pub fn is_air(self) -> bool {
        self == Block::AIR
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Pickaxe,
    Axe,
    Shovel,
    Hoe,
    Shears,
    Sword,
}

impl ToolKind {
    pub fn from_name(s: &str) -> Option<ToolKind> {
        match s {
            "pickaxe" => Some(ToolKind::Pickaxe),
            "axe" => Some(ToolKind::Axe),
            "shovel" => Some(ToolKind::Shovel),
            "hoe" => Some(ToolKind::Hoe),
            "shears" => Some(ToolKind::Shears),
            "sword" => Some(ToolKind::Sword),
            _ => None,
        }
    }
}

/// A held item that may lose durability while mining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub kind: ToolKind,
    #[serde(default)]
    pub tier: u8,
    // Damage taken so far
    #[serde(default)]
    pub damage: u32,
    // Zero means the tool never wears out
    #[serde(default)]
    pub max_damage: u32,
}

impl Tool {
    pub fn new(name: impl Into<String>, kind: ToolKind, tier: u8, max_damage: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            tier,
            damage: 0,
            max_damage,
        }
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage.min(self.max_damage);
        self
    }

    #[inline]
    pub fn is_depletable(&self) -> bool {
        self.max_damage > 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.max_damage.saturating_sub(self.damage)
    }

    #[inline]
    pub fn is_broken(&self) -> bool {
        self.is_depletable() && self.remaining() == 0
    }

    /// Adds `amount` damage, saturating at `max_damage`. Returns true if the tool broke.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if !self.is_depletable() {
            return false;
        }
        self.damage = self.damage.saturating_add(amount).min(self.max_damage);
        self.is_broken()
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_depletable() {
            write!(f, "{} ({}/{})", self.name, self.remaining(), self.max_damage)
        } else {
            f.write_str(&self.name)
        }
    }
}
