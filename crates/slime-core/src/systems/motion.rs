//! Motion Systems
//!
//! Moves every agent for the frame, then stamps each one onto the field.

use bevy_ecs::prelude::*;

use crate::components::agent::Agent;
use crate::components::field::TrailField;
use crate::components::frame::FrameState;
use crate::SimRng;

/// System: Step every agent along its heading, reflecting off the field edges
///
/// Agents are visited in spawn order so the RNG is consumed the same way on every run.
pub fn step_agents(
    frame: Res<FrameState>,
    mut rng: ResMut<SimRng>,
    mut agents: Query<&mut Agent>,
) {
    let dt = frame.dt();
    for mut agent in agents.iter_mut() {
        agent.step(dt, &mut *rng);
    }
}

/// System: Stamp every agent's pixel white
///
/// Stamping is a plain write of a constant, so overlapping agents are harmless.
pub fn stamp_agents(agents: Query<&Agent>, mut field: ResMut<TrailField>) {
    for agent in agents.iter() {
        agent.stamp(&mut field);
    }
}
