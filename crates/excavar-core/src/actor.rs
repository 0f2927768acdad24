use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Where the actor's action is being executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// A local replica; may look, may not remove.
    Client,
    /// The authoritative simulation.
    Server,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub side: Side,
    // Creative-style actors never wear out tools
    pub unlimited_resources: bool,
}

impl Actor {
    pub fn server(id: u64) -> Self {
        Self {
            id: ActorId(id),
            side: Side::Server,
            unlimited_resources: false,
        }
    }

    pub fn client(id: u64) -> Self {
        Self {
            id: ActorId(id),
            side: Side::Client,
            unlimited_resources: false,
        }
    }

    pub fn with_unlimited_resources(mut self, unlimited: bool) -> Self {
        self.unlimited_resources = unlimited;
        self
    }

    #[inline]
    pub fn is_authoritative(&self) -> bool {
        self.side == Side::Server
    }
}
