//! Slime Trail Simulation Library
//!
//! Agents wander a bounded canvas and stamp their pixel white; every frame the
//! canvas is blurred and faded, leaving glowing trails behind the swarm.
//!
//! A frame runs three chained systems on a `bevy_ecs` world:
//! `fade_trails -> step_agents -> stamp_agents`. [`Simulation`] owns the world
//! and the schedule, and [`presenter::run`] drives it from a clock.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod presenter;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use simulation::Simulation;

/// A source of uniformly distributed values, injected wherever agents need
/// randomness so tests can substitute a scripted one.
pub trait UniformSource {
    /// Draw a value from `[low, high)`. Callers guarantee `low < high`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl UniformSource for SmallRng {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.gen_range(low..high)
    }
}

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for SimRng {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.0.uniform(low, high)
    }
}
