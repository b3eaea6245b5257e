//! Trail System
//!
//! Diffuses and fades the trail field before agents mark it again.

use bevy_ecs::prelude::*;

use crate::components::field::{TrailField, TrailParams};
use crate::components::frame::FrameState;

/// System: Blur and fade the previous frame's trails, scaled by the frame delta
pub fn fade_trails(
    frame: Res<FrameState>,
    params: Res<TrailParams>,
    mut field: ResMut<TrailField>,
) {
    field.diffuse_and_fade(&params, frame.dt());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::field::TRAIL_WHITE;

    #[test]
    fn test_fade_trails_uses_frame_delta() {
        let mut world = World::new();
        let mut frame = FrameState::new();
        frame.begin(0.5).unwrap();
        world.insert_resource(frame);
        world.insert_resource(TrailParams::new(100.0, 0.0).unwrap());
        let mut field = TrailField::new(4, 4).unwrap();
        field.fill(TRAIL_WHITE);
        world.insert_resource(field);

        let mut schedule = Schedule::default();
        schedule.add_systems(fade_trails);
        schedule.run(&mut world);

        // 255 - 100 * 0.5
        assert_eq!(world.resource::<TrailField>().get(2, 2), Some([205, 205, 205]));
    }
}
