use excavar_geom::{Axis, Cell, Facing};

#[test]
fn cell_constants() {
    assert_eq!(Cell::ZERO, Cell::new(0, 0, 0));
    assert_eq!(Cell::UP, Cell::new(0, 1, 0));
    assert_eq!(Cell::DOWN, -Cell::UP);
}

#[test]
fn cell_add_sub_mul() {
    let a = Cell::new(1, 2, 3);
    let b = Cell::new(-4, 5, -6);
    assert_eq!(a + b, Cell::new(-3, 7, -3));
    assert_eq!((a + b) - a, b);
    assert_eq!(a * 2, Cell::new(2, 4, 6));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn checked_add_stops_at_i32_edges() {
    let edge = Cell::new(i32::MAX, 0, i32::MIN);
    assert_eq!(edge.checked_add(Cell::new(1, 0, 0)), None);
    assert_eq!(edge.checked_add(Cell::new(0, 0, -1)), None);
    assert_eq!(
        edge.checked_add(Cell::new(-1, 5, 1)),
        Some(Cell::new(i32::MAX - 1, 5, i32::MIN + 1))
    );
}

#[test]
fn cell_tuple_conversions() {
    let c: Cell = (7, -8, 9).into();
    assert_eq!(c, Cell::new(7, -8, 9));
    let t: (i32, i32, i32) = c.into();
    assert_eq!(t, (7, -8, 9));
    assert_eq!(c.to_string(), "(7,-8,9)");
}

#[test]
fn cell_distances() {
    let a = Cell::new(0, 0, 0);
    let b = Cell::new(2, -3, 1);
    assert_eq!(a.manhattan(b), 6);
    assert_eq!(a.chebyshev(b), 3);
    assert_eq!(b.chebyshev(b), 0);
}

#[test]
fn facing_units_and_axes() {
    assert_eq!(Facing::East.unit(), Cell::new(1, 0, 0));
    assert_eq!(Facing::West.unit(), Cell::new(-1, 0, 0));
    assert_eq!(Facing::Up.unit(), Cell::new(0, 1, 0));
    assert_eq!(Facing::North.unit(), Cell::new(0, 0, -1));
    assert_eq!(Facing::East.axis(), Axis::X);
    assert_eq!(Facing::Down.axis(), Axis::Y);
    assert_eq!(Facing::South.axis(), Axis::Z);
    for f in Facing::ALL {
        assert_eq!(f.opposite().opposite(), f);
        assert_eq!(f.unit() + f.opposite().unit(), Cell::ZERO);
    }
}

#[test]
fn facing_perpendicular_order_is_fixed() {
    assert_eq!(
        Facing::East.perpendicular(),
        (Cell::new(0, 1, 0), Cell::new(0, 0, 1))
    );
    assert_eq!(
        Facing::Up.perpendicular(),
        (Cell::new(1, 0, 0), Cell::new(0, 0, 1))
    );
    assert_eq!(
        Facing::North.perpendicular(),
        (Cell::new(1, 0, 0), Cell::new(0, 1, 0))
    );
}

#[test]
fn facing_parse_accepts_both_spellings() {
    assert_eq!(Facing::parse("+x"), Some(Facing::East));
    assert_eq!(Facing::parse("East"), Some(Facing::East));
    assert_eq!(Facing::parse("-y"), Some(Facing::Down));
    assert_eq!(Facing::parse(" up "), Some(Facing::Up));
    assert_eq!(Facing::parse("sideways"), None);
    for f in Facing::ALL {
        assert_eq!(Facing::parse(f.name()), Some(f));
    }
}
