use crate::components::entity::Entity;
use crate::renderer::instance::{DrawCommand, RenderBuffer};

/// Build the render buffer from a set of entities, in iteration order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for entity in entities {
        buffer.push(draw_command(entity));
    }
}

/// Current frame of `entity`, drawn unscaled at its position.
pub fn draw_command(entity: &Entity) -> DrawCommand {
    DrawCommand {
        sheet: entity.kind.sheet(),
        source: entity.source_rect(),
        dest: entity.bounds(),
    }
}
