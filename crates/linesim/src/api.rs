//! External shim (spec.md §6, §2 item 8): free functions matching the
//! spec's C-shaped names one-to-one over `World`'s idiomatic methods.

use crate::error::WorldError;
use crate::segment::Segment;
use crate::vec2::Vec2;
use crate::world::{World, WorldConfig};

pub fn world_new(capacity: usize) -> Result<World, WorldError> {
    World::new(WorldConfig::default(), capacity)
}

pub fn world_add_segment(
    world: &mut World,
    p1: Vec2,
    p2: Vec2,
    velocity: Vec2,
    color: impl Into<String>,
) -> Result<u32, WorldError> {
    world.add_segment(p1, p2, velocity, color).map(|id| id.0)
}

pub fn world_step(world: &mut World) {
    world.step();
}

pub fn world_num_segments(world: &World) -> usize {
    world.num_segments()
}

pub fn world_get_segment(world: &World, index: usize) -> Option<&Segment> {
    world.get_segment(index)
}

pub fn world_num_line_wall_collisions(world: &World) -> u64 {
    world.num_line_wall_collisions()
}

pub fn world_num_line_line_collisions(world: &World) -> u64 {
    world.num_line_line_collisions()
}
