use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name matched against tool lists when the actor holds nothing.
pub const BARE_HAND: &str = "hand";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExcavarConfig {
    /// Global cap on cells per excavation, start cell included.
    #[serde(default = "default_block_limit")]
    pub block_limit: usize,
    #[serde(default = "default_requires_correct_tool")]
    pub requires_correct_tool: bool,
    /// Default preserve-tool flag for actors that do not send their own.
    #[serde(default = "default_prevent_tool_breaking")]
    pub prevent_tool_breaking: bool,
    #[serde(default)]
    pub only_while_sneaking: bool,
    #[serde(default)]
    pub tools: ToolList,
    #[serde(default)]
    pub denied_blocks: Vec<String>,
}

fn default_block_limit() -> usize {
    64
}
fn default_requires_correct_tool() -> bool {
    true
}
fn default_prevent_tool_breaking() -> bool {
    true
}

impl Default for ExcavarConfig {
    fn default() -> Self {
        Self {
            block_limit: default_block_limit(),
            requires_correct_tool: default_requires_correct_tool(),
            prevent_tool_breaking: default_prevent_tool_breaking(),
            only_while_sneaking: false,
            tools: ToolList::default(),
            denied_blocks: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Everything except the listed entries.
    #[default]
    Deny,
    /// Only the listed entries.
    Allow,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolList {
    #[serde(default)]
    pub mode: ListMode,
    #[serde(default)]
    pub entries: Vec<String>,
}

impl ToolList {
    /// `tool` is the held tool's name, `None` for an empty hand.
    pub fn allows(&self, tool: Option<&str>) -> bool {
        let name = tool.unwrap_or(BARE_HAND);
        let listed = self.entries.iter().any(|e| e == name);
        match self.mode {
            ListMode::Deny => !listed,
            ListMode::Allow => listed,
        }
    }
}

impl ExcavarConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: ExcavarConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_limit == 0 {
            return Err(ConfigError::Invalid("block_limit must be at least 1".into()));
        }
        if let Some(dup) = first_duplicate(&self.tools.entries) {
            return Err(ConfigError::Invalid(format!("tool `{dup}` listed twice")));
        }
        Ok(())
    }

    pub fn is_tool_allowed(&self, tool: Option<&str>) -> bool {
        self.tools.allows(tool)
    }

    /// Blocks without a known name are never denied.
    pub fn mining_allowed(&self, block_name: Option<&str>) -> bool {
        match block_name {
            Some(name) => !self.denied_blocks.iter().any(|b| b == name),
            None => true,
        }
    }
}

fn first_duplicate(entries: &[String]) -> Option<&str> {
    entries
        .iter()
        .enumerate()
        .find(|(i, e)| entries[..*i].contains(e))
        .map(|(_, e)| e.as_str())
}
