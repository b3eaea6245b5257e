//! Swarm Spawning
//!
//! Spawns the agent population at the centre of the field, fanned out over a full circle.

use bevy_ecs::prelude::*;

use crate::components::agent::Agent;
use crate::components::field::Bounds;
use crate::config::SwarmConfig;

/// Starting point shared by every agent: the centre pixel, rounded down
pub fn spawn_origin(bounds: Bounds) -> (f32, f32) {
    ((bounds.width / 2) as f32, (bounds.height / 2) as f32)
}

/// Heading in degrees for agent `index` of `count`, spreading them evenly
/// so no two agents start in the same direction.
pub fn initial_heading(index: usize, count: usize) -> f32 {
    index as f32 * 360.0 / count.max(1) as f32
}

/// Build the agents described by `config` without touching a world
pub fn build_swarm(config: &SwarmConfig, bounds: Bounds) -> Vec<Agent> {
    let (x, y) = spawn_origin(bounds);
    (0..config.agent_count)
        .map(|i| {
            Agent::new(
                x,
                y,
                initial_heading(i, config.agent_count),
                config.speed,
                bounds,
            )
        })
        .collect()
}

/// Spawn all agents into the world, in index order
pub fn spawn_swarm(world: &mut World, config: &SwarmConfig, bounds: Bounds) -> Vec<Entity> {
    build_swarm(config, bounds)
        .into_iter()
        .map(|agent| world.spawn(agent).id())
        .collect()
}

/// Summary of spawned agents
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmSummary {
    pub total_agents: usize,
    pub origin: (f32, f32),
    pub speed: f32,
}

impl SwarmSummary {
    pub fn new(config: &SwarmConfig, bounds: Bounds) -> Self {
        Self {
            total_agents: config.agent_count,
            origin: spawn_origin(bounds),
            speed: config.speed,
        }
    }
}

impl std::fmt::Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} agents at ({}, {}) moving {} px/s",
            self.total_agents, self.origin.0, self.origin.1, self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(320, 180).unwrap()
    }

    #[test]
    fn test_default_swarm_headings_are_whole_degrees() {
        let agents = build_swarm(&SwarmConfig::default(), bounds());
        assert_eq!(agents.len(), 360);
        for (i, agent) in agents.iter().enumerate() {
            assert_eq!(agent.heading, i as f32);
            assert_eq!((agent.x, agent.y), (160.0, 90.0));
            assert_eq!(agent.speed, 20.0);
            assert_eq!(agent.bounds(), bounds());
        }
    }

    #[test]
    fn test_headings_are_distinct() {
        let config = SwarmConfig {
            agent_count: 7,
            speed: 1.0,
        };
        let mut headings: Vec<f32> = build_swarm(&config, bounds())
            .iter()
            .map(|a| a.heading)
            .collect();
        headings.dedup();
        assert_eq!(headings.len(), 7);
        assert!(headings.iter().all(|h| (0.0..360.0).contains(h)));
    }

    #[test]
    fn test_origin_rounds_down() {
        let odd = Bounds::new(11, 7).unwrap();
        assert_eq!(spawn_origin(odd), (5.0, 3.0));
    }

    #[test]
    fn test_spawn_swarm_into_world() {
        let mut world = World::new();
        let config = SwarmConfig {
            agent_count: 4,
            speed: 2.0,
        };
        let entities = spawn_swarm(&mut world, &config, bounds());
        assert_eq!(entities.len(), 4);
        assert_eq!(world.get::<Agent>(entities[1]).unwrap().heading, 90.0);

        let summary = SwarmSummary::new(&config, bounds());
        assert_eq!(summary.to_string(), "4 agents at (160, 90) moving 2 px/s");
    }
}
