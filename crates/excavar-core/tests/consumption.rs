mod common;

use common::{ORE, TestGrid};
use excavar_core::{
    Actor, ExcavarConfig, ExcavarError, Excavador, JobRequest, ShapeRegistry, StopReason,
};
use excavar_geom::{Cell, Facing};
use excavar_shapes::{ShapeId, Tunnel};

/// Ten ore cells along +x from the origin.
fn line_grid() -> TestGrid {
    let mut g = TestGrid::new();
    g.fill(Cell::new(0, 0, 0), Cell::new(9, 0, 0), ORE);
    g
}

fn discovered(g: &TestGrid, actor: Actor, preserve: bool) -> Excavador {
    let reg = ShapeRegistry::with_builtin();
    let req = JobRequest::new(Cell::ZERO, actor, Facing::East, ORE)
        .shape(ShapeId::builtin(Tunnel::ID))
        .preserve_tool(preserve);
    let mut j = Excavador::new(&reg, req, &ExcavarConfig::default()).unwrap();
    j.discover_all(g);
    assert_eq!(j.discovered_cells().len(), 10);
    j
}

#[test]
fn removes_everything_in_list_order() {
    let mut g = line_grid().with_tool(100, 0);
    let j = discovered(&g, Actor::server(1), true);
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 10);
    assert_eq!(report.removed, 10);
    assert_eq!(report.stop, StopReason::Completed);
    assert_eq!(g.removed, j.discovered_cells().as_slice());
    assert_eq!(g.tool_damage(), 10);
}

#[test]
fn preserve_stops_before_first_removal() {
    let mut g = line_grid().with_tool(10, 8);
    let j = discovered(&g, Actor::server(1), true);
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.stop, StopReason::ToolProtected);
    assert!(g.removed.is_empty());
    assert_eq!(g.tool_damage(), 8);
}

#[test]
fn preserve_keeps_two_uses() {
    let mut g = line_grid().with_tool(10, 6);
    let j = discovered(&g, Actor::server(1), true);
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.stop, StopReason::ToolProtected);
    assert_eq!(g.tool.as_ref().map(|t| t.remaining()), Some(2));
}

#[test]
fn without_preserve_one_use_is_kept() {
    let mut g = line_grid().with_tool(10, 6);
    let j = discovered(&g, Actor::server(1), false);
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 3);
    assert_eq!(g.tool.as_ref().map(|t| t.remaining()), Some(1));
    assert!(!g.tool.as_ref().is_some_and(|t| t.is_broken()));
}

#[test]
fn unlimited_resources_ignore_durability() {
    let mut g = line_grid().with_tool(10, 9);
    let j = discovered(&g, Actor::server(1).with_unlimited_resources(true), true);
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 10);
    assert_eq!(report.stop, StopReason::Completed);
    assert_eq!(g.tool_damage(), 9);
}

#[test]
fn non_depletable_tools_and_bare_hands_never_stop() {
    let mut g = line_grid().with_tool(0, 0);
    let j = discovered(&g, Actor::server(1), true);
    assert_eq!(j.consume(&mut g).unwrap().processed, 10);

    let mut g = line_grid();
    let j = discovered(&g, Actor::server(1), true);
    assert_eq!(j.consume(&mut g).unwrap().removed, 10);
}

#[test]
fn cells_cleared_in_between_count_as_processed_not_removed() {
    let mut g = line_grid();
    let j = discovered(&g, Actor::server(1), true);
    g.blocks.remove(&Cell::new(4, 0, 0));
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 10);
    assert_eq!(report.removed, 9);
}

#[test]
fn client_side_consume_is_rejected_before_touching_grid() {
    let mut g = line_grid().with_tool(100, 0);
    let j = discovered(&g, Actor::client(1), true);
    let err = j.consume(&mut g).unwrap_err();
    assert!(matches!(err, ExcavarError::IllegitimateContext));
    assert!(g.removed.is_empty());
    assert_eq!(g.blocks.len(), 10);
}

#[test]
fn consuming_before_discovery_does_nothing() {
    let mut g = line_grid();
    let reg = ShapeRegistry::with_builtin();
    let req = JobRequest::new(Cell::ZERO, Actor::server(1), Facing::East, ORE);
    let j = Excavador::new(&reg, req, &ExcavarConfig::default()).unwrap();
    let report = j.consume(&mut g).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.stop, StopReason::Completed);
}
