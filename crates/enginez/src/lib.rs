pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, CollisionVerdict, CollisionPredicate};
pub use api::types::{EntityId, SheetId, GameEvent};
pub use components::entity::{Entity, EntityKind, DEFAULT_HEALTH};
pub use components::animation::FrameAnimation;
pub use components::mask::{Mask, PixelMask};
pub use self::core::collision::{CollisionEngine, CollisionBody, PIXEL_STEP};
pub use self::core::geometry::{Rect, Rgb};
pub use self::core::rng::Rng;
pub use self::core::scene::Scene;
pub use self::core::time::FixedTimestep;
pub use self::core::world::{World, TickReport, is_stale};
pub use renderer::instance::{DrawCommand, RenderBuffer};
pub use renderer::traits::{RenderSink, RecordingSink};
pub use input::queue::{InputEvent, InputQueue, Key, KeyState};
pub use assets::manifest::{SheetManifest, SheetDescriptor};
pub use assets::loader::AssetSource;
#[cfg(feature = "image-loader")]
pub use assets::loader::{ImageAssets, mask_from_image};
pub use systems::animation::tick_animations;
pub use error::{EngineError, Result};
