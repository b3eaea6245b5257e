//! End-to-end scenarios for the frame pipeline.
//!
//! These drive whole frames through `Simulation` and check the observable
//! field and agent state against hand-computed values.

use slime_core::components::{Agent, Bounds, TrailField, TrailParams, TRAIL_WHITE};
use slime_core::config::SimConfig;
use slime_core::presenter::{run, FixedClock, HeadlessPresenter, Viewport};
use slime_core::{SimRng, Simulation};

/// One stationary agent in the middle of a 10x10 field
fn stationary_sim() -> Simulation {
    let field = TrailField::new(10, 10).unwrap();
    let agent = Agent::new(5.0, 5.0, 0.0, 0.0, field.bounds());
    let params = TrailParams::new(30.0, 0.95).unwrap();
    Simulation::from_parts(field, params, [agent], SimRng::seeded(0)).unwrap()
}

#[test]
fn test_stationary_agent_three_frames() {
    let mut sim = stationary_sim();
    let params = sim.params();

    for frame in 1..=3 {
        let report = sim.advance(0.1).unwrap();
        assert_eq!(report.frame, frame);

        // Freshly stamped
        assert_eq!(sim.field().get(5, 5), Some(TRAIL_WHITE));
        assert!(!sim.field().is_black());

        // The next frame's diffuse and fade dims the centre before it is stamped again
        let mut preview = sim.field().clone();
        preview.diffuse_and_fade(&params, 0.1);
        let centre = preview.get(5, 5).unwrap();
        assert!(centre[0] < 255, "frame {}: centre not dimmed", frame);
        assert!(centre[0] > 0, "frame {}: centre faded out entirely", frame);
    }

    // Trails have spread to the neighbours, but not to the far corner
    let field = sim.field();
    let neighbour = field.get(4, 5).unwrap();
    assert!(neighbour[0] > 0 && neighbour[0] < 255);
    assert_eq!(neighbour[0], neighbour[1]);
    assert_eq!(neighbour[1], neighbour[2]);
    assert_eq!(field.get(0, 0), Some([0, 0, 0]));
}

#[test]
fn test_second_frame_values() {
    let mut sim = stationary_sim();
    sim.advance(0.1).unwrap();
    sim.advance(0.1).unwrap();

    // Neighbour: blur 255/9 = 28.33, blend 0.95 * 28.33 + 0.05 * 0 = 26.92, fade 3 -> 24
    assert_eq!(sim.field().get(4, 5), Some([24, 24, 24]));
    assert_eq!(sim.field().get(6, 6), Some([24, 24, 24]));
    // Two pixels away is outside the kernel after one blur
    assert_eq!(sim.field().get(3, 5), Some([0, 0, 0]));
}

#[test]
fn test_agent_reflects_off_right_edge() {
    let bounds = Bounds::new(20, 12).unwrap();
    let agent = Agent::new(25.0, 6.0, 0.0, 0.0, bounds);
    let field = TrailField::with_bounds(bounds);
    let mut sim =
        Simulation::from_parts(field, TrailParams::default(), [agent], SimRng::seeded(11)).unwrap();

    sim.advance(0.016).unwrap();

    let agents = sim.agents();
    assert_eq!(agents[0].x, 19.0);
    assert!((135.0..225.0).contains(&agents[0].heading));
    assert_eq!(sim.field().get(19, 6), Some(TRAIL_WHITE));
}

#[test]
fn test_default_swarm_stays_in_bounds() {
    let mut config = SimConfig::default();
    config.field.width = 64;
    config.field.height = 36;
    config.swarm.speed = 120.0;
    let mut sim = Simulation::new(&config).unwrap();

    for frame in 0..200 {
        // An occasional long frame, as after a pause
        let dt = if frame % 40 == 39 { 1.5 } else { 1.0 / 60.0 };
        sim.advance(dt).unwrap();
        for agent in sim.agents() {
            let (x, y) = agent.pixel().expect("agent escaped the field");
            assert!(x < 64 && y < 36);
        }
    }
}

#[test]
fn test_long_pause_fades_old_trails() {
    let mut sim = stationary_sim();
    sim.advance(0.1).unwrap();
    sim.advance(0.1).unwrap();

    // 30/s over 20s removes everything but this frame's stamp
    let report = sim.advance(20.0).unwrap();
    assert_eq!(report.field.lit_pixels, 1);
    assert_eq!(sim.field().get(5, 5), Some(TRAIL_WHITE));
}

#[test]
fn test_headless_run_from_config() {
    let mut config = SimConfig::default();
    config.field.width = 80;
    config.field.height = 45;
    config.swarm.agent_count = 90;

    let mut sim = Simulation::new(&config).unwrap();
    let mut presenter = HeadlessPresenter::new(30, Viewport::new(160, 90)).with_report_interval(10);
    let summary = run(&mut sim, &mut FixedClock(1.0 / 60.0), &mut presenter).unwrap();

    assert_eq!(summary.frames, 30);
    assert_eq!(summary.seed, Some(42));
    assert_eq!(summary.final_field.peak, 255);
    assert!(summary.final_field.lit_pixels > 0);
}
