//! In-memory voxel world that excavations run against.
#![forbid(unsafe_code)]

pub mod chunk_coord;
pub mod store;
pub mod world;
pub mod worldgen;

pub use chunk_coord::ChunkCoord;
pub use store::{ChunkedStore, StoreStats};
pub use world::{VoxelWorld, WorldError};
pub use worldgen::{OreField, OreFieldConfig, VeinDef};
