//! ECS Systems
//!
//! The per-frame pipeline: fade the trails, move the agents, stamp them.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;

pub mod motion;
pub mod trails;

pub use motion::{stamp_agents, step_agents};
pub use trails::fade_trails;

/// Build the frame schedule.
///
/// The field is faded first so this frame's stamps land on the decayed image,
/// and every stamp is in place before the next frame's fade reads it.
pub fn build_frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems((fade_trails, step_agents, stamp_agents).chain());
    schedule
}
