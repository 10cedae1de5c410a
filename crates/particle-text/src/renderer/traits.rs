//! Visible drawing surface contract.
//!
//! The browser bridge implements this over a `CanvasRenderingContext2d`;
//! native hosts can implement it over any 2D rasterizer.

use glam::Vec2;

use super::color::ParticleColor;
use super::instance::{DrawCommand, DrawList};

/// Drawing primitives the widget needs from its host.
pub trait DrawSurface {
    /// Match the backing store to the widget size.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the whole surface to transparent.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor);

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: &ParticleColor);

    /// Replay one draw command.
    fn draw(&mut self, cmd: &DrawCommand, color: &ParticleColor) {
        match *cmd {
            DrawCommand::Circle { center, radius } => self.fill_circle(center, radius, color),
            DrawCommand::Square { top_left, side } => {
                self.fill_rect(top_left, Vec2::splat(side), color)
            }
        }
    }

    /// Clear, then replay a full frame.
    fn present(&mut self, list: &DrawList, color: &ParticleColor) {
        self.clear();
        for cmd in list.iter() {
            self.draw(cmd, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl DrawSurface for Recorder {
        fn resize(&mut self, width: u32, height: u32) {
            self.ops.push(format!("resize {}x{}", width, height));
        }
        fn clear(&mut self) {
            self.ops.push("clear".into());
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor) {
            self.ops.push(format!("circle {} {} {} {}", center.x, center.y, radius, color.css()));
        }
        fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: &ParticleColor) {
            self.ops.push(format!("rect {} {} {} {} {}", top_left.x, top_left.y, size.x, size.y, color.css()));
        }
    }

    #[test]
    fn present_clears_then_draws_in_order() {
        let mut list = DrawList::new();
        list.push(DrawCommand::Circle { center: Vec2::new(1.0, 1.0), radius: 2.0 });
        list.push(DrawCommand::Square { top_left: Vec2::new(5.0, 6.0), side: 3.0 });

        let mut surface = Recorder::default();
        surface.present(&list, &ParticleColor::parse("#f00"));
        assert_eq!(
            surface.ops,
            vec![
                "clear".to_string(),
                "circle 1 1 2 #f00".to_string(),
                "rect 5 6 3 3 #f00".to_string(),
            ]
        );
    }
}
