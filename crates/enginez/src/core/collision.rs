//! Two-phase collision test: bounding-box pruning, then sparse per-pixel
//! sampling of the overlapping region.

use crate::api::game::{CollisionPredicate, CollisionVerdict, GameConfig};
use crate::components::entity::Entity;
use crate::components::mask::{Mask, PixelMask};
use crate::core::geometry::Rect;
use crate::error::Result;

/// Default sampling stride of the per-pixel phase.
pub const PIXEL_STEP: u32 = 30;

/// A participant in a collision query: screen-space bounds plus the mask
/// covering them.
pub struct CollisionBody<'a, M: PixelMask + ?Sized> {
    pub bounds: Rect,
    pub mask: &'a M,
}

impl<M: PixelMask + ?Sized> Clone for CollisionBody<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PixelMask + ?Sized> Copy for CollisionBody<'_, M> {}

impl<'a, M: PixelMask + ?Sized> CollisionBody<'a, M> {
    pub fn new(bounds: Rect, mask: &'a M) -> Self {
        Self { bounds, mask }
    }

    fn is_solid(&self, predicate: CollisionPredicate, x: i32, y: i32) -> Result<bool> {
        // screen -> mask-local
        let (lx, ly) = (x - self.bounds.left(), y - self.bounds.top());
        match predicate {
            CollisionPredicate::Black => self.mask.is_black(lx, ly),
            CollisionPredicate::Opaque => self.mask.is_opaque(lx, ly),
        }
    }
}

impl<'a> From<&'a Entity> for CollisionBody<'a, Mask> {
    fn from(entity: &'a Entity) -> Self {
        Self::new(entity.bounds(), entity.mask())
    }
}

/// Stateless collision tester configured with a stride and policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEngine {
    pixel_step: u32,
    verdict: CollisionVerdict,
    predicate: CollisionPredicate,
}

impl Default for CollisionEngine {
    fn default() -> Self {
        Self {
            pixel_step: PIXEL_STEP,
            verdict: CollisionVerdict::default(),
            predicate: CollisionPredicate::default(),
        }
    }
}

impl CollisionEngine {
    pub fn new(pixel_step: u32, verdict: CollisionVerdict, predicate: CollisionPredicate) -> Self {
        Self {
            pixel_step: pixel_step.max(1),
            verdict,
            predicate,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.pixel_step,
            config.collision_verdict,
            config.collision_predicate,
        )
    }

    /// Whether two entities collide at this instant.
    pub fn collides(&self, a: &Entity, b: &Entity) -> Result<bool> {
        self.test(CollisionBody::from(a), CollisionBody::from(b))
    }

    /// Collision test over arbitrary mask surfaces.
    ///
    /// Disjoint boxes return `false` without touching either mask. Sampling
    /// short-circuits on the first pixel that is solid in both masks.
    pub fn test<MA, MB>(&self, a: CollisionBody<'_, MA>, b: CollisionBody<'_, MB>) -> Result<bool>
    where
        MA: PixelMask + ?Sized,
        MB: PixelMask + ?Sized,
    {
        let Some(inter) = a.bounds.intersection(&b.bounds) else {
            return Ok(false);
        };

        if self.verdict == CollisionVerdict::BoundingBox {
            return Ok(true);
        }

        let step = self.pixel_step as usize;
        for x in (inter.left()..inter.right()).step_by(step) {
            for y in (inter.top()..inter.bottom()).step_by(step) {
                if a.is_solid(self.predicate, x, y)? && b.is_solid(self.predicate, x, y)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rgb;
    use crate::error::EngineError;
    use glam::UVec2;
    use std::cell::Cell;

    /// Mask double that counts classifier calls.
    struct SpyMask {
        inner: Mask,
        calls: Cell<usize>,
    }

    impl SpyMask {
        fn new(inner: Mask) -> Self {
            Self { inner, calls: Cell::new(0) }
        }
    }

    impl PixelMask for SpyMask {
        fn size(&self) -> UVec2 {
            self.inner.size()
        }

        fn classify(&self, x: i32, y: i32) -> Result<Rgb> {
            self.calls.set(self.calls.get() + 1);
            self.inner.classify(x, y)
        }

        fn is_transparent(&self, x: i32, y: i32) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            self.inner.is_transparent(x, y)
        }
    }

    fn black(w: u32, h: u32) -> Mask {
        Mask::filled(w, h, Rgb::BLACK, Rgb::GREEN)
    }

    fn keyed(w: u32, h: u32) -> Mask {
        Mask::filled(w, h, Rgb::GREEN, Rgb::GREEN)
    }

    #[test]
    fn disjoint_boxes_never_sample() {
        let a = SpyMask::new(black(10, 10));
        let b = SpyMask::new(black(10, 10));
        for verdict in [CollisionVerdict::PerPixel, CollisionVerdict::BoundingBox] {
            let engine = CollisionEngine::new(PIXEL_STEP, verdict, CollisionPredicate::Black);
            let hit = engine
                .test(
                    CollisionBody::new(Rect::new(0, 0, 10, 10), &a),
                    CollisionBody::new(Rect::new(100, 100, 10, 10), &b),
                )
                .unwrap();
            assert!(!hit);
        }
        assert_eq!(a.calls.get(), 0);
        assert_eq!(b.calls.get(), 0);
    }

    #[test]
    fn full_overlap_of_black_masks_collides() {
        let engine = CollisionEngine::default();
        let (a, b) = (black(128, 64), black(128, 64));
        let rect = Rect::new(40, 50, 128, 64);
        assert!(engine
            .test(CollisionBody::new(rect, &a), CollisionBody::new(rect, &b))
            .unwrap());
    }

    #[test]
    fn first_hit_short_circuits() {
        let engine = CollisionEngine::default();
        let a = SpyMask::new(black(64, 64));
        let b = SpyMask::new(black(64, 64));
        let rect = Rect::new(0, 0, 64, 64);
        assert!(engine
            .test(CollisionBody::new(rect, &a), CollisionBody::new(rect, &b))
            .unwrap());
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn keyed_masks_only_collide_by_bounding_box() {
        let (a, b) = (keyed(40, 40), black(40, 40));
        let ra = Rect::new(0, 0, 40, 40);
        let rb = Rect::new(10, 10, 40, 40);

        let per_pixel = CollisionEngine::default();
        assert!(!per_pixel
            .test(CollisionBody::new(ra, &a), CollisionBody::new(rb, &b))
            .unwrap());

        let legacy = CollisionEngine::new(
            PIXEL_STEP,
            CollisionVerdict::BoundingBox,
            CollisionPredicate::Black,
        );
        assert!(legacy
            .test(CollisionBody::new(ra, &a), CollisionBody::new(rb, &b))
            .unwrap());
    }

    #[test]
    fn opaque_predicate_accepts_coloured_pixels() {
        let red = Mask::filled(20, 20, Rgb::new(200, 0, 0), Rgb::GREEN);
        let rect = Rect::new(0, 0, 20, 20);
        let black_only = CollisionEngine::default();
        let opaque = CollisionEngine::new(
            PIXEL_STEP,
            CollisionVerdict::PerPixel,
            CollisionPredicate::Opaque,
        );
        assert!(!black_only
            .test(CollisionBody::new(rect, &red), CollisionBody::new(rect, &red))
            .unwrap());
        assert!(opaque
            .test(CollisionBody::new(rect, &red), CollisionBody::new(rect, &red))
            .unwrap());
    }

    #[test]
    fn sampling_uses_mask_local_coordinates() {
        // Only the top-left pixel of `b` is solid; it sits at the
        // intersection origin in screen space.
        let a = black(50, 50);
        let b = Mask::from_fn(50, 50, Rgb::GREEN, |x, y| {
            if x == 0 && y == 0 { Rgb::BLACK } else { Rgb::GREEN }
        });
        let engine = CollisionEngine::default();
        let hit = engine
            .test(
                CollisionBody::new(Rect::new(300, 200, 50, 50), &a),
                CollisionBody::new(Rect::new(320, 230, 50, 50), &b),
            )
            .unwrap();
        assert!(hit);
    }

    #[test]
    fn stride_can_miss_thin_features() {
        // A solid column at local x = 5 falls between samples 0 and 30.
        let a = black(60, 60);
        let b = Mask::from_fn(60, 60, Rgb::GREEN, |x, _| {
            if x == 5 { Rgb::BLACK } else { Rgb::GREEN }
        });
        let rect = Rect::new(0, 0, 60, 60);
        let coarse = CollisionEngine::default();
        let fine = CollisionEngine::new(1, CollisionVerdict::PerPixel, CollisionPredicate::Black);
        assert!(!coarse.test(CollisionBody::new(rect, &a), CollisionBody::new(rect, &b)).unwrap());
        assert!(fine.test(CollisionBody::new(rect, &a), CollisionBody::new(rect, &b)).unwrap());
    }

    #[test]
    fn collides_is_symmetric() {
        let shapes = [
            black(30, 30),
            keyed(30, 30),
            Mask::from_fn(30, 30, Rgb::GREEN, |x, y| {
                if (x / 3 + y / 3) % 2 == 0 { Rgb::BLACK } else { Rgb::GREEN }
            }),
        ];
        let engines = [
            CollisionEngine::new(1, CollisionVerdict::PerPixel, CollisionPredicate::Black),
            CollisionEngine::new(7, CollisionVerdict::PerPixel, CollisionPredicate::Opaque),
            CollisionEngine::default(),
        ];
        for engine in engines {
            for ma in &shapes {
                for mb in &shapes {
                    for dx in (-35..=35).step_by(5) {
                        for dy in (-35..=35).step_by(7) {
                            let a = CollisionBody::new(Rect::new(100, 100, 30, 30), ma);
                            let b = CollisionBody::new(Rect::new(100 + dx, 100 + dy, 30, 30), mb);
                            assert_eq!(
                                engine.test(a, b).unwrap(),
                                engine.test(b, a).unwrap(),
                                "dx={} dy={}",
                                dx,
                                dy
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn undersized_mask_surfaces_out_of_range() {
        // A mask smaller than its claimed bounds can only come from bypassing
        // entity construction; the sampler still refuses to read past it.
        let small = black(5, 5);
        let big = black(40, 40);
        let engine = CollisionEngine::new(10, CollisionVerdict::PerPixel, CollisionPredicate::Opaque);
        let keyed_big = keyed(40, 40);
        let res = engine.test(
            CollisionBody::new(Rect::new(0, 0, 40, 40), &keyed_big),
            CollisionBody::new(Rect::new(0, 0, 40, 40), &small),
        );
        assert!(res.is_ok(), "transparent first mask short-circuits the AND");
        let res = engine.test(
            CollisionBody::new(Rect::new(0, 0, 40, 40), &small),
            CollisionBody::new(Rect::new(0, 0, 40, 40), &big),
        );
        assert!(res.unwrap());
        let sparse = Mask::from_fn(40, 40, Rgb::GREEN, |x, y| {
            if x >= 10 && y >= 10 { Rgb::BLACK } else { Rgb::GREEN }
        });
        let res = engine.test(
            CollisionBody::new(Rect::new(0, 0, 40, 40), &sparse),
            CollisionBody::new(Rect::new(0, 0, 40, 40), &small),
        );
        assert!(matches!(res, Err(EngineError::OutOfRange { .. })));
    }

    #[test]
    fn entities_collide_through_their_masks() {
        use crate::api::types::EntityId;
        use crate::components::entity::{Entity, EntityKind};
        use glam::IVec2;

        let size = UVec2::new(64, 32);
        let player = Entity::new(EntityId(1), EntityKind::Player, size, 2, black(64, 32))
            .unwrap()
            .with_pos(IVec2::new(100, 100));
        let near = Entity::new(EntityId(2), EntityKind::Hostile, size, 2, black(64, 32))
            .unwrap()
            .with_pos(IVec2::new(140, 120));
        let far = Entity::new(EntityId(3), EntityKind::Hostile, size, 2, black(64, 32))
            .unwrap()
            .with_pos(IVec2::new(400, 400));

        let engine = CollisionEngine::default();
        assert!(engine.collides(&player, &near).unwrap());
        assert!(engine.collides(&near, &player).unwrap());
        assert!(!engine.collides(&player, &far).unwrap());
    }
}
