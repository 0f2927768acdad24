use excavar_geom::Cell;
use hashbrown::HashSet;

/// Ordered, duplicate-free list of cells.
///
/// Insertion order is significant: it is both the expansion order during
/// discovery and the removal order during consumption. The hash index only
/// answers membership; it never drives iteration.
#[derive(Clone, Debug, Default)]
pub struct CellList {
    order: Vec<Cell>,
    index: HashSet<Cell>,
}

impl CellList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            order: Vec::with_capacity(n),
            index: HashSet::with_capacity(n),
        }
    }

    /// Appends `cell` unless already present. Returns whether it was added.
    pub fn push(&mut self, cell: Cell) -> bool {
        if !self.index.insert(cell) {
            return false;
        }
        self.order.push(cell);
        true
    }

    #[inline]
    pub fn contains(&self, cell: &Cell) -> bool {
        self.index.contains(cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Cell> {
        self.order.get(i).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.order.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.order.iter().copied()
    }
}

impl PartialEq for CellList {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for CellList {}

impl<'a> IntoIterator for &'a CellList {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl FromIterator<Cell> for CellList {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut out = CellList::new();
        for c in iter {
            out.push(c);
        }
        out
    }
}
