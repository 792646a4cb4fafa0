//! The world driver: owns the player and the hostiles and runs one tick of
//! game logic at a time.

use glam::IVec2;

use crate::api::game::GameConfig;
use crate::api::types::{EntityId, GameEvent};
use crate::assets::loader::AssetSource;
use crate::assets::manifest::{SheetDescriptor, SheetManifest};
use crate::components::entity::{Entity, EntityKind};
use crate::core::collision::CollisionEngine;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::error::Result;
use crate::input::queue::KeyState;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::RenderSink;
use crate::systems::animation::tick_animations;
use crate::systems::render::build_render_buffer;

/// Whether the world should drop this entity: a hostile that has left the
/// playfield through the left edge.
pub fn is_stale(entity: &Entity) -> bool {
    entity.kind == EntityKind::Hostile && entity.pos.x < 0
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based number of the tick that produced this report.
    pub tick: u64,
    pub spawned: Vec<EntityId>,
    pub despawned: Vec<EntityId>,
    /// Hostiles touching the player this tick.
    pub collisions: Vec<EntityId>,
}

pub struct World {
    config: GameConfig,
    manifest: SheetManifest,
    assets: Box<dyn AssetSource>,
    collision: CollisionEngine,
    player: Entity,
    hostiles: Scene,
    rng: Rng,
    next_id: u32,
    tick: u64,
    events: Vec<GameEvent>,
}

impl World {
    /// Build the world and its player.
    ///
    /// Failing to construct the player is returned to the caller; there is no
    /// game without one.
    pub fn new(
        config: GameConfig,
        manifest: SheetManifest,
        mut assets: Box<dyn AssetSource>,
    ) -> Result<Self> {
        let player_id = EntityId(1);
        let player = build_entity(
            assets.as_mut(),
            &config,
            &manifest.player,
            player_id,
            EntityKind::Player,
        )?;
        log::info!(
            "world: {}x{} viewport, player {} ({}x{}, {} frames)",
            config.viewport_width,
            config.viewport_height,
            player_id,
            player.size().x,
            player.size().y,
            player.frame_count(),
        );

        Ok(Self {
            collision: CollisionEngine::from_config(&config),
            rng: Rng::new(config.seed),
            config,
            manifest,
            assets,
            player,
            hostiles: Scene::new(),
            next_id: player_id.0 + 1,
            tick: 0,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn hostiles(&self) -> &Scene {
        &self.hostiles
    }

    /// Events emitted by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Construct a hostile at `pos` and add it to the world.
    ///
    /// Load and shape errors are returned and leave the world unchanged.
    pub fn spawn_hostile(&mut self, pos: IVec2) -> Result<EntityId> {
        let id = EntityId(self.next_id);
        let hostile = build_entity(
            self.assets.as_mut(),
            &self.config,
            &self.manifest.hostile,
            id,
            EntityKind::Hostile,
        )?
        .with_pos(pos);
        self.next_id += 1;
        self.hostiles.spawn(hostile);
        self.events.push(GameEvent::spawn(id, pos.x, pos.y));
        log::debug!("spawned hostile {} at ({}, {})", id, pos.x, pos.y);
        Ok(id)
    }

    /// Run one tick: player movement and boundary, spawn roll, pruning,
    /// collision checks, then animation and hostile movement.
    ///
    /// Animation and pixel-access errors are returned as fatal.
    pub fn tick(&mut self, keys: KeyState) -> Result<TickReport> {
        self.tick += 1;
        self.events.clear();
        let mut report = TickReport {
            tick: self.tick,
            ..Default::default()
        };

        let delta = keys.player_delta(self.config.player_speed);
        self.player.move_by(delta.x, delta.y);
        self.player
            .enforce_boundary(self.config.viewport_width, self.config.viewport_height);

        if let Some(id) = self.roll_spawn()? {
            report.spawned.push(id);
        }

        for gone in self.hostiles.prune(is_stale) {
            log::debug!("despawned hostile {} at x = {}", gone.id, gone.pos.x);
            self.events.push(GameEvent::despawn(gone.id, gone.pos.x, gone.pos.y));
            report.despawned.push(gone.id);
        }

        for hostile in self.hostiles.iter() {
            if self.collision.collides(&self.player, hostile)? {
                log::info!("collision: player vs hostile {}", hostile.id);
                self.events
                    .push(GameEvent::collision(hostile.id, hostile.pos.x, hostile.pos.y));
                report.collisions.push(hostile.id);
            }
        }

        self.player.advance_frame(None)?;
        tick_animations(self.hostiles.iter_mut())?;
        for hostile in self.hostiles.iter_mut() {
            hostile.integrate();
        }

        Ok(report)
    }

    /// Fill `buffer` with this tick's draw commands: player first, then
    /// hostiles in spawn order.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(
            std::iter::once(&self.player).chain(self.hostiles.iter()),
            buffer,
        );
    }

    /// Render into `buffer` and hand it to `sink`.
    pub fn draw(&self, buffer: &mut RenderBuffer, sink: &mut dyn RenderSink) {
        self.render(buffer);
        log::trace!("draw: {} commands", buffer.command_count());
        sink.submit(buffer);
    }

    /// Roll for a spawn. A recoverable construction failure aborts only the
    /// spawn; anything else is propagated.
    fn roll_spawn(&mut self) -> Result<Option<EntityId>> {
        if self.rng.roll(1..=100) >= self.config.spawn_threshold {
            return Ok(None);
        }
        let jitter = self.config.spawn_jitter.max(1);
        let x = spawn_coord(self.rng.roll(1..=jitter), self.config.spawn_offset);
        let y = spawn_coord(self.rng.roll(1..=jitter), self.config.spawn_offset);

        match self.spawn_hostile(IVec2::new(x, y)) {
            Ok(id) => Ok(Some(id)),
            Err(err) if err.is_recoverable() => {
                log::warn!("hostile spawn aborted: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn spawn_coord(roll: u32, offset: i32) -> i32 {
    i32::try_from(roll).unwrap_or(i32::MAX).saturating_add(offset)
}

fn build_entity(
    assets: &mut dyn AssetSource,
    config: &GameConfig,
    sheet: &SheetDescriptor,
    id: EntityId,
    kind: EntityKind,
) -> Result<Entity> {
    let mask = assets.load_mask(sheet, config.chroma_key)?;
    let entity = Entity::new(id, kind, sheet.frame_size(), sheet.frames, mask)?
        .with_health(config.starting_health);
    Ok(match kind {
        EntityKind::Hostile => entity.with_velocity(config.hostile_velocity),
        EntityKind::Player => entity,
    })
}
