//! Animation system: advances every entity's sprite frame by one.

use crate::components::entity::Entity;
use crate::error::Result;

/// Advance the animation of every entity one frame.
///
/// Call this once per tick after collisions. Stops at the first entity that
/// cannot be animated.
pub fn tick_animations<'a>(entities: impl Iterator<Item = &'a mut Entity>) -> Result<()> {
    for entity in entities {
        entity.advance_frame(None)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::EntityKind;
    use crate::components::mask::Mask;
    use crate::core::geometry::Rgb;
    use crate::error::EngineError;
    use glam::UVec2;

    fn sprite(frames: u32) -> Entity {
        let mask = Mask::filled(8, 8, Rgb::BLACK, Rgb::GREEN);
        Entity::new(EntityId(1), EntityKind::Hostile, UVec2::splat(8), frames, mask).unwrap()
    }

    #[test]
    fn tick_advances_and_loops() {
        let mut entities = vec![sprite(2), sprite(3)];
        for _ in 0..3 {
            tick_animations(entities.iter_mut()).unwrap();
        }
        assert_eq!(entities[0].current_frame(), 1);
        assert_eq!(entities[1].current_frame(), 0);
    }

    #[test]
    fn zero_frame_sheet_fails_the_tick() {
        let mut entities = vec![sprite(2), sprite(0)];
        let res = tick_animations(entities.iter_mut());
        assert!(matches!(res, Err(EngineError::InvalidAnimationState)));
    }
}
