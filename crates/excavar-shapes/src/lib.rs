//! Shape strategies that decide which neighbors join an excavation, and the
//! registry that selects between them.
#![forbid(unsafe_code)]

pub mod builtin;
pub mod cells;
pub mod id;
pub mod registry;
pub mod shape;

pub use builtin::{Cube, StairsDown, Tunnel, Wall};
pub use cells::CellList;
pub use id::{InvalidShapeId, ShapeId};
pub use registry::{ShapeRegistry, UnknownShape};
pub use shape::{BlockSource, Shape};
