use excavar_blocks::Block;
use excavar_geom::Cell;
use hashbrown::HashMap;

use crate::chunk_coord::ChunkCoord;

pub const DEFAULT_CHUNK_SIZE: i32 = 32;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub chunks: usize,
    pub cells: usize,
    pub rev_entries: usize,
}

/// Sparse block storage bucketed by cubic chunk, with per-chunk revisions.
///
/// Cells never written read as `None`; callers decide what that means.
/// Every write stamps the containing chunk, plus the neighbor across any
/// face the cell touches, with a fresh revision.
#[derive(Debug, Clone)]
pub struct ChunkedStore {
    size: i32,
    inner: HashMap<ChunkCoord, HashMap<Cell, Block>>,
    rev: HashMap<ChunkCoord, u64>,
    counter: u64,
}

impl Default for ChunkedStore {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ChunkedStore {
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(1),
            inner: HashMap::new(),
            rev: HashMap::new(),
            counter: 0,
        }
    }

    pub fn chunk_size(&self) -> i32 {
        self.size
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            chunks: self.inner.len(),
            cells: self.inner.values().map(|m| m.len()).sum(),
            rev_entries: self.rev.len(),
        }
    }

    #[inline]
    pub fn chunk_of(&self, cell: Cell) -> ChunkCoord {
        ChunkCoord::containing(cell, self.size)
    }

    pub fn get(&self, cell: Cell) -> Option<Block> {
        self.inner
            .get(&self.chunk_of(cell))
            .and_then(|m| m.get(&cell).copied())
    }

    /// Writes `b` at `cell` and returns the revision stamped on the affected chunks.
    pub fn set(&mut self, cell: Cell, b: Block) -> u64 {
        let k = self.chunk_of(cell);
        self.inner.entry(k).or_default().insert(cell, b);
        self.bump_around(cell)
    }

    fn bump_around(&mut self, cell: Cell) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        let stamp = self.counter;
        for k in self.affected_chunks(cell) {
            self.rev.insert(k, stamp);
        }
        stamp
    }

    /// The chunk holding `cell` first, then any neighbor sharing the face it sits on.
    pub fn affected_chunks(&self, cell: Cell) -> Vec<ChunkCoord> {
        let k = self.chunk_of(cell);
        let local = cell - k.origin(self.size);
        let edge = |l: i32| -> Vec<i32> {
            let mut v = vec![0];
            if l == 0 {
                v.push(-1);
            }
            if l == self.size - 1 && self.size > 1 {
                v.push(1);
            }
            v
        };
        let (ox, oy, oz) = (edge(local.x), edge(local.y), edge(local.z));

        let mut out = vec![k];
        for dx in &ox {
            for dy in &oy {
                for dz in &oz {
                    if *dx == 0 && *dy == 0 && *dz == 0 {
                        continue;
                    }
                    let n = k.offset(*dx, *dy, *dz);
                    if !out.contains(&n) {
                        out.push(n);
                    }
                }
            }
        }
        out
    }

    pub fn rev(&self, chunk: ChunkCoord) -> u64 {
        self.rev.get(&chunk).copied().unwrap_or(0)
    }

    /// Latest revision handed out, 0 before any write.
    pub fn current_rev(&self) -> u64 {
        self.counter
    }

    /// Chunks stamped after `since`, sorted.
    pub fn changed_since(&self, since: u64) -> Vec<ChunkCoord> {
        let mut out: Vec<ChunkCoord> = self
            .rev
            .iter()
            .filter(|(_, r)| **r > since)
            .map(|(k, _)| *k)
            .collect();
        out.sort();
        out
    }

    /// All stored cells of one chunk, in no particular order.
    pub fn snapshot_chunk(&self, chunk: ChunkCoord) -> Vec<(Cell, Block)> {
        match self.inner.get(&chunk) {
            Some(m) => m.iter().map(|(c, b)| (*c, *b)).collect(),
            None => Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Block)> + '_ {
        self.inner
            .values()
            .flat_map(|m| m.iter().map(|(c, b)| (*c, *b)))
    }
}
