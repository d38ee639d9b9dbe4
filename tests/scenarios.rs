use sandfall_engine::{ParticleKind, SimConfig, WorldCore};

fn world(rows: u32, cols: u32, seed: u64) -> WorldCore {
    WorldCore::with_config(rows, cols, SimConfig::default().with_seed(seed)).unwrap()
}

#[test]
fn sand_falls_one_row_per_tick() {
    let mut world = world(10, 10, 1);
    world.request_placement(0, 5, ParticleKind::Sand);

    for tick in 1..=9 {
        world.step();
        assert_eq!(world.kind_at(tick, 5), ParticleKind::Sand, "tick {}", tick);
        assert_eq!(world.particle_count(), 1);
    }
    world.step();
    assert_eq!(world.kind_at(9, 5), ParticleKind::Sand);
}

#[test]
fn sand_slides_diagonally_off_dirt() {
    for seed in 0..16 {
        let mut world = world(3, 3, seed);
        world.request_placement(0, 1, ParticleKind::Sand);
        world.request_placement(1, 1, ParticleKind::Dirt);
        world.step();

        let left = world.kind_at(1, 0) == ParticleKind::Sand;
        let right = world.kind_at(1, 2) == ParticleKind::Sand;
        assert!(left ^ right, "seed {}", seed);
        assert_eq!(world.kind_at(0, 1), ParticleKind::Empty);
        assert_eq!(world.kind_at(1, 1), ParticleKind::Dirt);
    }
}

#[test]
fn a_single_drop_settles_on_the_bottom_row() {
    let mut world = world(5, 5, 7);
    world.request_placement(0, 0, ParticleKind::Water);
    for _ in 0..4 {
        world.step();
    }
    for _ in 0..50 {
        world.step();
        let on_floor = (0..5).any(|c| world.kind_at(4, c) == ParticleKind::Water);
        assert!(on_floor);
        assert_eq!(world.particle_count(), 1);
    }
}

#[test]
fn water_fills_the_floor_and_comes_to_rest() {
    let mut world = world(5, 5, 11);
    world.enable_perf_metrics(true);
    for row in 0..5 {
        world.request_placement(row, 0, ParticleKind::Water);
    }

    let mut settled = false;
    for _ in 0..500 {
        world.step();
        if (0..5).all(|c| world.kind_at(4, c) == ParticleKind::Water) {
            settled = true;
            break;
        }
    }
    assert!(settled, "bottom row never filled");

    world.step();
    world.step();
    let perf = world.get_perf_stats();
    assert_eq!(perf.moves() + perf.swaps(), 0);
    assert_eq!(world.awake_count(), 0);
}

#[test]
fn sand_swaps_below_water() {
    let mut world = world(2, 1, 3);
    world.request_placement(0, 0, ParticleKind::Sand);
    world.request_placement(1, 0, ParticleKind::Water);
    world.step();

    assert_eq!(world.kind_at(1, 0), ParticleKind::Sand);
    assert_eq!(world.kind_at(0, 0), ParticleKind::Water);
}

#[test]
fn exposed_dirt_turns_to_grass_right_after_threshold() {
    let mut config = SimConfig::default().with_seed(5);
    config.grass.grow_threshold = 5;
    config.grass.grow_chance = 100;
    let mut world = WorldCore::with_config(10, 10, config).unwrap();
    world.request_placement(9, 5, ParticleKind::Dirt);

    for _ in 0..5 {
        world.step();
        assert_eq!(world.kind_at(9, 5), ParticleKind::Dirt);
    }
    world.step();
    assert_eq!(world.kind_at(9, 5), ParticleKind::Grass);

    for _ in 0..20 {
        world.step();
        assert_eq!(world.kind_at(9, 5), ParticleKind::Grass);
    }
}

#[test]
fn out_of_bounds_placement_is_ignored() {
    let mut world = world(4, 4, 9);
    world.request_placement(0, 0, ParticleKind::Dirt);
    world.step();
    let before: Vec<u8> = world.snapshot().kinds().collect();

    world.request_placement(-1, 2, ParticleKind::Sand);
    world.request_placement(4, 0, ParticleKind::Sand);
    world.request_placement(0, 99, ParticleKind::Water);
    world.step();

    let after: Vec<u8> = world.snapshot().kinds().collect();
    assert_eq!(before, after);
}
