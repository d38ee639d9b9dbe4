use sandfall_engine::{ParticleKind, SimConfig, WorldCore};

#[test]
fn perf_smoke_step() {
    let mut world = WorldCore::with_config(64, 128, SimConfig::default().with_seed(17)).unwrap();
    world.enable_perf_metrics(true);
    for row in 0..32 {
        for col in 0..128 {
            let kind = if col % 3 == 0 { ParticleKind::Water } else { ParticleKind::Sand };
            world.request_placement(row, col, kind);
        }
    }
    world.step();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.placements_applied(), 32 * 128);
    assert_eq!(stats.particle_count(), 32 * 128);
    assert!(stats.particles_processed() > 0);
    assert!(stats.moves() > 0);

    for _ in 0..60 {
        world.step();
    }
    assert_eq!(world.particle_count(), 32 * 128);
}
