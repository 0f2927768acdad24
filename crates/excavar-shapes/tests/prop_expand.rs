use excavar_blocks::Block;
use excavar_geom::{Cell, Facing};
use excavar_shapes::{BlockSource, CellList, Cube, Shape, StairsDown, Tunnel, Wall};
use proptest::prelude::*;

const ORE: Block = Block::new(3, 0);
const STONE: Block = Block::new(1, 0);

// Deterministic pseudo-random field: a cell is ore when its hashed bits say so.
struct Field {
    seed: u32,
}

impl BlockSource for Field {
    fn material_at(&self, c: Cell) -> Block {
        let h = (c.x as u32).wrapping_mul(73_856_093)
            ^ (c.y as u32).wrapping_mul(19_349_663)
            ^ (c.z as u32).wrapping_mul(83_492_791)
            ^ self.seed;
        if h % 3 == 0 { STONE } else { ORE }
    }
}

fn arb_facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

fn shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Cube::new(1)),
        Box::new(Cube::new(2)),
        Box::new(Tunnel),
        Box::new(Wall),
        Box::new(StairsDown),
    ]
}

proptest! {
    // expand never appends more than the budget and reports exactly what it used
    #[test]
    fn expand_respects_budget(seed in any::<u32>(), facing in arb_facing(), budget in 0usize..40, which in 0usize..5) {
        let field = Field { seed };
        let all = shapes();
        let shape = &all[which];
        let mut found = CellList::new();
        found.push(Cell::ZERO);
        let before = found.len();
        let left = shape.expand(&field, Cell::ZERO, facing, ORE, &mut found, budget);
        let appended = found.len() - before;
        prop_assert!(appended <= budget);
        prop_assert_eq!(left, budget - appended);
    }

    // Every appended cell matches the target and is one of the shape's offsets
    #[test]
    fn expand_appends_only_matching_candidates(seed in any::<u32>(), facing in arb_facing(), which in 0usize..5) {
        let field = Field { seed };
        let all = shapes();
        let shape = &all[which];
        let origin = Cell::new(10, -4, 7);
        let mut found = CellList::new();
        found.push(origin);
        shape.expand(&field, origin, facing, ORE, &mut found, usize::MAX);
        let offs = shape.offsets(facing);
        let expected: Vec<Cell> = offs
            .iter()
            .map(|o| origin + *o)
            .filter(|c| field.material_at(*c) == ORE)
            .collect();
        prop_assert_eq!(&found.as_slice()[1..], expected.as_slice());
    }

    // Already discovered cells are skipped and never duplicated
    #[test]
    fn expand_skips_known_cells(seed in any::<u32>(), facing in arb_facing()) {
        let field = Field { seed };
        let shape = Cube::new(1);
        let mut found = CellList::new();
        found.push(Cell::ZERO);
        shape.expand(&field, Cell::ZERO, facing, ORE, &mut found, usize::MAX);
        let snapshot = found.clone();
        let left = shape.expand(&field, Cell::ZERO, facing, ORE, &mut found, 10);
        prop_assert_eq!(left, 10);
        prop_assert_eq!(found, snapshot);
    }
}

#[test]
fn closure_block_source_works() {
    let all_ore = |_c: Cell| ORE;
    let mut found = CellList::new();
    found.push(Cell::ZERO);
    let left = Tunnel.expand(&all_ore, Cell::ZERO, Facing::East, ORE, &mut found, 5);
    assert_eq!(left, 4);
    assert_eq!(found.as_slice(), &[Cell::ZERO, Cell::new(1, 0, 0)]);
}

#[test]
fn zero_budget_appends_nothing() {
    let all_ore = |_c: Cell| ORE;
    let mut found = CellList::new();
    let left = Cube::new(1).expand(&all_ore, Cell::ZERO, Facing::Up, ORE, &mut found, 0);
    assert_eq!(left, 0);
    assert!(found.is_empty());
}
