//! Vein-mining core: shape-driven discovery of connected cells and the
//! durability-aware loop that removes them.
#![forbid(unsafe_code)]

pub mod actor;
pub mod client;
pub mod config;
pub mod error;
pub mod grid;
pub mod job;
pub mod service;
pub mod session;

pub use actor::{Actor, ActorId, Side};
pub use client::ClientController;
pub use config::{ExcavarConfig, ListMode, ToolList};
pub use error::{ConfigError, ExcavarError};
pub use grid::Grid;
pub use job::{ConsumeReport, DiscoveryOutcome, Excavador, JobRequest, ShapeChoice, StopReason};
pub use service::Excavar;
pub use session::{ActorPrefs, SessionStore};

pub use excavar_shapes::{CellList, ShapeId, ShapeRegistry};
