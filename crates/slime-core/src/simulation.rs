//! Simulation
//!
//! Owns the ECS world and the frame schedule. The trail field is only ever
//! mutated from inside [`Simulation::advance`]; everything else gets a shared
//! reference.

use bevy_ecs::prelude::*;
use slime_events::FrameReport;

use crate::components::agent::Agent;
use crate::components::field::{TrailField, TrailParams};
use crate::components::frame::FrameState;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::output::field_stats;
use crate::setup::{insert_resources, spawn_swarm};
use crate::systems::build_frame_schedule;
use crate::SimRng;

/// A running trail simulation
pub struct Simulation {
    world: World,
    schedule: Schedule,
    agent_count: usize,
    seed: Option<u64>,
}

impl Simulation {
    /// Build a simulation from configuration: black field, seeded RNG and the
    /// configured swarm at the centre of the field.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let bounds = config.field.bounds()?;
        let seed = config.simulation.seed;

        let mut world = World::new();
        insert_resources(
            &mut world,
            TrailField::with_bounds(bounds),
            config.trail.params()?,
            SimRng::seeded(seed),
        );
        let agent_count = spawn_swarm(&mut world, &config.swarm, bounds).len();

        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            agent_count,
            seed,
            "simulation created"
        );

        Ok(Self {
            world,
            schedule: build_frame_schedule(),
            agent_count,
            seed: Some(seed),
        })
    }

    /// Build a simulation from explicit pieces. Agents keep the given order,
    /// which is also the order they consume the RNG in.
    ///
    /// Every agent must share the field's bounds and have a finite speed and
    /// heading. Positions may start off the field (they are pulled back on the
    /// first step) but must not be NaN.
    pub fn from_parts(
        field: TrailField,
        params: TrailParams,
        agents: impl IntoIterator<Item = Agent>,
        rng: SimRng,
    ) -> Result<Self, SimError> {
        let bounds = field.bounds();
        let mut world = World::new();
        insert_resources(&mut world, field, params, rng);

        let mut agent_count = 0;
        for agent in agents {
            if !agent.speed.is_finite() {
                return Err(SimError::AgentSpeed(agent.speed));
            }
            if !agent.heading.is_finite() {
                return Err(SimError::AgentHeading(agent.heading));
            }
            if agent.x.is_nan() || agent.y.is_nan() {
                return Err(SimError::AgentPosition {
                    x: agent.x,
                    y: agent.y,
                });
            }
            if agent.bounds() != bounds {
                let b = agent.bounds();
                return Err(SimError::AgentBounds {
                    agent: (b.width, b.height),
                    field: (bounds.width, bounds.height),
                });
            }
            world.spawn(agent);
            agent_count += 1;
        }

        Ok(Self {
            world,
            schedule: build_frame_schedule(),
            agent_count,
            seed: None,
        })
    }

    /// Run one frame: fade the field, step and stamp every agent.
    ///
    /// `dt` is the elapsed time in seconds. NaN or infinite values are rejected
    /// before anything changes; negative values are treated as zero.
    pub fn advance(&mut self, dt: f32) -> Result<FrameReport, SimError> {
        let dt = self.world.resource_mut::<FrameState>().begin(dt)?;

        self.schedule.run(&mut self.world);

        let mut state = self.world.resource_mut::<FrameState>();
        state.finish();
        let frame = state.frame;

        let report = FrameReport {
            frame,
            dt,
            agents: self.agent_count,
            field: field_stats(self.field()),
        };
        tracing::debug!(
            frame,
            dt,
            lit_pixels = report.field.lit_pixels,
            "frame advanced"
        );
        Ok(report)
    }

    /// Read-only view of the trail field
    pub fn field(&self) -> &TrailField {
        self.world.resource::<TrailField>()
    }

    pub fn params(&self) -> TrailParams {
        *self.world.resource::<TrailParams>()
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.world.resource::<FrameState>().frame
    }

    /// Seed the RNG was built from, when the simulation came from a config
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Snapshot of every agent, in spawn order
    pub fn agents(&mut self) -> Vec<Agent> {
        let mut query = self.world.query::<&Agent>();
        query.iter(&self.world).cloned().collect()
    }
}
