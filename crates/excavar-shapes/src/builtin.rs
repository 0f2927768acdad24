//! Built-in shapes.
//!
//! | shape         | candidates per expanded cell                                   |
//! |---------------|----------------------------------------------------------------|
//! | `Cube`        | every cell within `radius` on all three axes                    |
//! | `Tunnel`      | the next cell along the facing                                  |
//! | `Wall`        | the 8-ring in the plane perpendicular to the facing             |
//! | `StairsDown`  | one step along the facing and one down                          |

use std::borrow::Cow;

use excavar_geom::{Cell, Facing};

use crate::id::ShapeId;
use crate::shape::Shape;

/// All cells within `radius` in every axis (a 3x3x3 block for radius 1).
///
/// Offset order: `dz` outermost, then `dy`, then `dx` innermost, each running
/// from `-radius` to `radius`; the centre is skipped. Facing is ignored.
#[derive(Clone, Debug)]
pub struct Cube {
    radius: i32,
    offsets: Vec<Cell>,
}

impl Cube {
    pub const SHAPELESS: &'static str = "shapeless";
    /// Largest accepted radius; 17x17x17 candidates per expanded cell.
    pub const MAX_RADIUS: i32 = 8;

    /// Radius is clamped to `1..=MAX_RADIUS`.
    pub fn new(radius: i32) -> Self {
        let radius = radius.clamp(1, Self::MAX_RADIUS);
        let side = (2 * radius + 1) as usize;
        let mut offsets = Vec::with_capacity(side * side * side - 1);
        for dz in -radius..=radius {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    offsets.push(Cell::new(dx, dy, dz));
                }
            }
        }
        Self { radius, offsets }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Shape for Cube {
    fn offsets(&self, _facing: Facing) -> Cow<'_, [Cell]> {
        Cow::Borrowed(&self.offsets)
    }
}

/// A one-wide line that keeps going along the facing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tunnel;

impl Tunnel {
    pub const ID: &'static str = "tunnel";
}

impl Shape for Tunnel {
    fn offsets(&self, facing: Facing) -> Cow<'_, [Cell]> {
        Cow::Owned(vec![facing.unit()])
    }
}

/// The plane perpendicular to the facing.
///
/// With `(u, v)` from [`Facing::perpendicular`], offsets are `a*u + b*v` for
/// `a` in -1..=1 (outer) and `b` in -1..=1 (inner), skipping `(0, 0)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wall;

impl Wall {
    pub const ID: &'static str = "wall";
}

impl Shape for Wall {
    fn offsets(&self, facing: Facing) -> Cow<'_, [Cell]> {
        let (u, v) = facing.perpendicular();
        let mut out = Vec::with_capacity(8);
        for a in -1..=1 {
            for b in -1..=1 {
                if a == 0 && b == 0 {
                    continue;
                }
                out.push(u * a + v * b);
            }
        }
        Cow::Owned(out)
    }
}

/// A descending staircase along the facing. Vertical facings dig straight.
#[derive(Clone, Copy, Debug, Default)]
pub struct StairsDown;

impl StairsDown {
    pub const ID: &'static str = "stairs_down";
}

impl Shape for StairsDown {
    fn offsets(&self, facing: Facing) -> Cow<'_, [Cell]> {
        let step = if facing.is_vertical() {
            facing.unit()
        } else {
            facing.unit() + Cell::DOWN
        };
        Cow::Owned(vec![step])
    }
}

/// Ids of the shapes every registry starts with, in registry order.
pub fn builtin_ids() -> [ShapeId; 4] {
    [
        ShapeId::builtin(Cube::SHAPELESS),
        ShapeId::builtin(StairsDown::ID),
        ShapeId::builtin(Tunnel::ID),
        ShapeId::builtin(Wall::ID),
    ]
}
