//! Integer grid geometry: cells and axis-aligned facings.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A single addressable position in the voxel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ZERO: Cell = Cell { x: 0, y: 0, z: 0 };
    pub const UP: Cell = Cell { x: 0, y: 1, z: 0 };
    pub const DOWN: Cell = Cell { x: 0, y: -1, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// `self + rhs`, or `None` when any component leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, rhs: Cell) -> Option<Cell> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
            z: self.z.checked_add(rhs.z)?,
        })
    }

    /// Neighbor one step towards `facing`.
    #[inline]
    pub fn relative(self, facing: Facing) -> Self {
        self + facing.unit()
    }

    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// Chebyshev (chessboard) distance; the cube radius that contains both cells.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x
            .abs_diff(other.x)
            .max(self.y.abs_diff(other.y))
            .max(self.z.abs_diff(other.z))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl Add for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Cell {
    #[inline]
    fn add_assign(&mut self, rhs: Cell) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Cell {
    type Output = Cell;
    #[inline]
    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Cell {
    type Output = Cell;
    #[inline]
    fn mul(self, rhs: i32) -> Cell {
        Cell::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Cell {
    type Output = Cell;
    #[inline]
    fn neg(self) -> Cell {
        Cell::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for Cell {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Cell> for (i32, i32, i32) {
    fn from(value: Cell) -> Self {
        (value.x, value.y, value.z)
    }
}

impl From<[i32; 3]> for Cell {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six axis-aligned directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Facing {
    pub const ALL: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    #[inline]
    pub const fn unit(self) -> Cell {
        match self {
            Facing::Down => Cell::new(0, -1, 0),
            Facing::Up => Cell::new(0, 1, 0),
            Facing::North => Cell::new(0, 0, -1),
            Facing::South => Cell::new(0, 0, 1),
            Facing::West => Cell::new(-1, 0, 0),
            Facing::East => Cell::new(1, 0, 0),
        }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Facing::Down | Facing::Up => Axis::Y,
            Facing::North | Facing::South => Axis::Z,
            Facing::West | Facing::East => Axis::X,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Down => Facing::Up,
            Facing::Up => Facing::Down,
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
            Facing::East => Facing::West,
        }
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self.axis(), Axis::Y)
    }

    /// The two unit vectors spanning the plane perpendicular to this facing.
    ///
    /// Order is fixed: X before Y before Z among the remaining axes.
    #[inline]
    pub const fn perpendicular(self) -> (Cell, Cell) {
        match self.axis() {
            Axis::X => (Cell::new(0, 1, 0), Cell::new(0, 0, 1)),
            Axis::Y => (Cell::new(1, 0, 0), Cell::new(0, 0, 1)),
            Axis::Z => (Cell::new(1, 0, 0), Cell::new(0, 1, 0)),
        }
    }

    /// Accepts `+x`/`-y` style names as well as the compass names.
    pub fn parse(s: &str) -> Option<Facing> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "-y" => Some(Facing::Down),
            "up" | "+y" | "y" => Some(Facing::Up),
            "north" | "-z" => Some(Facing::North),
            "south" | "+z" | "z" => Some(Facing::South),
            "west" | "-x" => Some(Facing::West),
            "east" | "+x" | "x" => Some(Facing::East),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Up => "up",
            Facing::North => "north",
            Facing::South => "south",
            Facing::West => "west",
            Facing::East => "east",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
