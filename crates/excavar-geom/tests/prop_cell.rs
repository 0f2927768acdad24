use excavar_geom::{Cell, Facing};
use proptest::prelude::*;

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    (small_i32(), small_i32(), small_i32()).prop_map(|(x, y, z)| Cell::new(x, y, z))
}

fn arb_facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

proptest! {
    // Addition commutativity
    #[test]
    fn cell_add_commutative(a in arb_cell(), b in arb_cell()) {
        prop_assert_eq!(a + b, b + a);
    }

    // Offsetting by a delta and subtracting it again is the identity
    #[test]
    fn cell_offset_roundtrip(a in arb_cell(), d in arb_cell()) {
        prop_assert_eq!((a + d) - d, a);
        prop_assert_eq!(a.offset(d.x, d.y, d.z), a + d);
    }

    // Every relative neighbor is at manhattan and chebyshev distance 1
    #[test]
    fn relative_is_unit_step(a in arb_cell(), f in arb_facing()) {
        let n = a.relative(f);
        prop_assert_eq!(a.manhattan(n), 1);
        prop_assert_eq!(a.chebyshev(n), 1);
    }

    // Chebyshev never exceeds manhattan
    #[test]
    fn chebyshev_le_manhattan(a in arb_cell(), b in arb_cell()) {
        prop_assert!(a.chebyshev(b) <= a.manhattan(b));
    }
}
