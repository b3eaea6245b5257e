//! World Initialization
//!
//! Inserts the simulation resources into a fresh ECS world.

use bevy_ecs::prelude::*;

use crate::components::field::{TrailField, TrailParams};
use crate::components::frame::FrameState;
use crate::SimRng;

/// Insert the field, trail parameters, frame state and RNG.
pub fn insert_resources(world: &mut World, field: TrailField, params: TrailParams, rng: SimRng) {
    world.insert_resource(field);
    world.insert_resource(params);
    world.insert_resource(FrameState::new());
    world.insert_resource(rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resources() {
        let mut world = World::new();
        insert_resources(
            &mut world,
            TrailField::new(8, 4).unwrap(),
            TrailParams::default(),
            SimRng::seeded(1),
        );

        assert_eq!(world.resource::<TrailField>().width(), 8);
        assert_eq!(world.resource::<FrameState>().frame, 0);
        assert!(world.contains_resource::<SimRng>());
    }
}
