use std::collections::HashMap;
use std::collections::HashSet;

use proptest::prelude::*;

use sparselife::cell::Coord;
use sparselife::patterns;
use sparselife::world::World;

fn live_set(world: &World) -> HashSet<Coord> {
    world.grid().live_cells().collect()
}

fn coord_set(cells: &[(i64, i64)]) -> HashSet<Coord> {
    cells.iter().copied().map(Coord::from).collect()
}

fn translated(cells: &HashSet<Coord>, dx: i64, dy: i64) -> HashSet<Coord> {
    cells.iter().map(|c| c.offset(dx, dy)).collect()
}

/// Straightforward B3/S23 step, counting neighbors from the live cells outwards.
fn reference_step(live: &HashSet<Coord>) -> HashSet<Coord> {
    let mut counts: HashMap<Coord, u8> = HashMap::new();

    for c in live {
        for n in c.neighbors() {
            *counts.entry(n).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(c, n)| *n == 3 || (*n == 2 && live.contains(c)))
        .map(|(c, _)| c)
        .collect()
}

/// Every neighbor of every live cell is tracked.
fn assert_frontier_contains_neighbors(world: &World) {
    for c in world.grid().live_cells() {
        for n in c.neighbors() {
            assert!(
                world.grid().contains(n.x, n.y),
                "{n:?}, neighbor of live cell {c:?}, isn't tracked at generation {}",
                world.generation()
            );
        }
    }
}

/// Every tracked cell is alive, or next to a cell that is alive now or was alive one generation
/// ago.
fn assert_frontier_is_justified(world: &World, previous: &HashSet<Coord>) {
    let live = live_set(world);

    for (c, _) in world.grid().tracked() {
        let justified = live.contains(&c)
            || c
                .neighbors()
                .iter()
                .any(|n| live.contains(n) || previous.contains(n));

        assert!(justified, "{c:?} is tracked for no reason");
    }
}

#[test]
fn empty_grid_is_stable() {
    let mut world = World::new();

    for _ in 0..5 {
        world.update();
        assert!(world.grid().is_empty());
    }
}

#[test]
fn block_is_invariant() {
    let block = coord_set(patterns::BLOCK.cells);
    let mut world = World::from_cells(block.iter().copied());

    for _ in 0..50 {
        world.update();
        assert_eq!(live_set(&world), block);
    }
}

#[test]
fn blinker_has_period_two() {
    let horizontal = coord_set(patterns::BLINKER.cells);
    let vertical = coord_set(&[(0, -1), (0, 0), (0, 1)]);

    let mut world = World::from_cells(horizontal.iter().copied());

    for _ in 0..10 {
        world.update();
        assert_eq!(live_set(&world), vertical);

        world.update();
        assert_eq!(live_set(&world), horizontal);
    }
}

#[test]
fn glider_moves_diagonally() {
    let glider = coord_set(patterns::GLIDER.cells);
    let mut world = World::from_cells(glider.iter().copied());

    for k in 1..=10 {
        world.advance(4);

        assert_eq!(live_set(&world), translated(&glider, k, k));
        assert_eq!(world.population(), 5);
    }

    assert_eq!(world.generation(), 40);
}

#[test]
fn glider_far_from_the_origin() {
    let glider = translated(&coord_set(patterns::GLIDER.cells), -1 << 40, 1 << 50);
    let mut world = World::from_cells(glider.iter().copied());

    world.advance(8);

    assert_eq!(live_set(&world), translated(&glider, 2, 2));
}

#[test]
fn frontier_is_maintained_across_steps() {
    let mut world = World::from_cells(patterns::DEFAULT_SEED.cells.iter().copied());

    for _ in 0..200 {
        let previous = live_set(&world);
        world.update();

        assert_frontier_contains_neighbors(&world);
        assert_frontier_is_justified(&world, &previous);
    }
}

#[test]
fn frontier_stays_proportional_to_population() {
    let mut world = World::from_cells(patterns::GLIDER.cells.iter().copied());
    world.advance(1000);

    // a glider never needs more than its own neighborhood plus the one it just left
    assert_eq!(world.population(), 5);
    assert!(world.grid().tracked_len() <= 5 * 9 * 2);
}

#[test]
fn query_far_away() {
    let world = World::from_cells(patterns::GLIDER.cells.iter().copied());

    for (x, y) in [
        (i64::MAX, i64::MAX),
        (i64::MIN, i64::MIN),
        (i64::MIN, i64::MAX),
        (0, i64::MIN),
    ] {
        assert!(!world.query(x, y));
    }
}

#[test]
fn default_seed_matches_reference() {
    let mut expected = coord_set(patterns::DEFAULT_SEED.cells);
    let mut world = World::from_cells(expected.iter().copied());

    for _ in 0..300 {
        world.update();
        expected = reference_step(&expected);

        assert_eq!(live_set(&world), expected, "generation {}", world.generation());
    }
}

#[test]
fn gosper_gun_is_periodic() -> anyhow::Result<()> {
    let mut world = World::new();
    world.load(std::fs::File::open("tests/patterns/gosper_gun.lif")?)?;

    let gun = live_set(&world);
    world.advance(30);

    let now = live_set(&world);
    assert!(gun.is_subset(&now));
    assert!(now.len() > gun.len());

    Ok(())
}

fn soup() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-10i64..10, -10i64..10), 0..60)
}

proptest! {
    #[test]
    fn query_is_total(x in any::<i64>(), y in any::<i64>(), cells in soup()) {
        let world = World::from_cells(cells.iter().copied());

        let expected = cells.contains(&(x, y));
        prop_assert_eq!(world.query(x, y), expected);
    }

    #[test]
    fn matches_reference(cells in soup(), steps in 0usize..12) {
        let mut expected: HashSet<Coord> = cells.iter().copied().map(Coord::from).collect();
        let mut world = World::from_cells(cells.iter().copied());

        for _ in 0..steps {
            world.update();
            expected = reference_step(&expected);
        }

        prop_assert_eq!(live_set(&world), expected);
    }

    #[test]
    fn frontier_invariants_hold(cells in soup(), steps in 1usize..12) {
        let mut world = World::from_cells(cells.iter().copied());
        assert_frontier_contains_neighbors(&world);

        for _ in 0..steps {
            let previous = live_set(&world);
            world.update();

            assert_frontier_contains_neighbors(&world);
            assert_frontier_is_justified(&world, &previous);
        }
    }

    #[test]
    fn failed_load_leaves_world_untouched(
        cells in soup(),
        pairs in prop::collection::vec((any::<i64>(), any::<i64>()), 0..20),
        at in any::<prop::sample::Index>(),
        junk in "[a-z!?.]{1,4}",
    ) {
        let mut world = World::from_cells(cells.iter().copied());
        world.advance(2);

        let before = live_set(&world);
        let tracked = world.grid().tracked_len();

        let mut tokens: Vec<String> = pairs
            .iter()
            .flat_map(|(x, y)| [x.to_string(), y.to_string()])
            .collect();
        tokens.insert(at.index(tokens.len() + 1), junk);

        let file = format!("#Life 1.06\n{}\n", tokens.join(" "));

        prop_assert!(world.load(file.as_bytes()).is_err());
        prop_assert_eq!(live_set(&world), before);
        prop_assert_eq!(world.grid().tracked_len(), tracked);
        prop_assert_eq!(world.generation(), 2);
    }
}
