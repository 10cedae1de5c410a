use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::api::config::ParticleShape;

/// One draw call emitted per particle per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle centered on `center`.
    Circle { center: Vec2, radius: f32 },
    /// Filled axis-aligned square with its top-left corner at `top_left`.
    Square { top_left: Vec2, side: f32 },
}

impl DrawCommand {
    pub fn for_shape(shape: ParticleShape, position: Vec2, size: f32) -> Self {
        match shape {
            ParticleShape::Circle => DrawCommand::Circle { center: position, radius: size },
            ParticleShape::Square => DrawCommand::Square { top_left: position, side: size },
        }
    }
}

/// Flat per-particle record for hosts that read the frame as raw floats
/// (e.g. a WebGPU renderer reading wasm memory).
/// 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    /// Radius for circles, side for squares.
    pub size: f32,
    /// 0.0 = circle, 1.0 = square.
    pub shape: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<DrawCommand> for ParticleInstance {
    fn from(cmd: DrawCommand) -> Self {
        match cmd {
            DrawCommand::Circle { center, radius } => ParticleInstance {
                x: center.x,
                y: center.y,
                size: radius,
                shape: 0.0,
            },
            DrawCommand::Square { top_left, side } => ParticleInstance {
                x: top_left.x,
                y: top_left.y,
                size: side,
                shape: 1.0,
            },
        }
    }
}

/// Draw commands for the current frame, in particle order.
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    instances: Vec<ParticleInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            instances: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.instances.clear();
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Rebuild the flat instance buffer from the current commands.
    pub fn rebuild_instances(&mut self) {
        self.instances.clear();
        self.instances
            .extend(self.commands.iter().map(|c| ParticleInstance::from(*c)));
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// Instance buffer viewed as raw floats.
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for wasm memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_instance_is_4_floats() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), ParticleInstance::STRIDE_BYTES);
    }

    #[test]
    fn shape_selects_command() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(
            DrawCommand::for_shape(ParticleShape::Circle, p, 2.0),
            DrawCommand::Circle { center: p, radius: 2.0 }
        );
        assert_eq!(
            DrawCommand::for_shape(ParticleShape::Square, p, 2.0),
            DrawCommand::Square { top_left: p, side: 2.0 }
        );
    }

    #[test]
    fn instances_mirror_commands() {
        let mut list = DrawList::new();
        list.push(DrawCommand::Circle { center: Vec2::new(1.0, 2.0), radius: 3.0 });
        list.push(DrawCommand::Square { top_left: Vec2::new(4.0, 5.0), side: 6.0 });
        list.rebuild_instances();

        assert_eq!(list.instance_count(), 2);
        assert_eq!(
            list.instance_floats(),
            &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 1.0]
        );

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.instance_count(), 0);
    }
}
