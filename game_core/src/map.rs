use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// The court: a fixed `[0, width] x [0, height]` rectangle with Y pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.court_width, config.court_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the ball is served from after every point
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Resting position of a paddle center
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(side), self.height / 2.0)
    }

    /// Clamp a center Y so that `half_extent` above and below stay on the court
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.clamp(half_extent, self.height - half_extent)
    }

    /// True when a circle at `y` pokes through the top or bottom wall
    pub fn is_outside_vertically(&self, y: f32, radius: f32) -> bool {
        y - radius < 0.0 || y + radius > self.height
    }

    /// Court Y (up) to drawing surface Y (down, origin top-left)
    pub fn to_surface_y(&self, y: f32) -> f32 {
        self.height - y
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(20.0, 300.0), Vec2::new(10.0, 150.0));
        assert_eq!(aabb.min, Vec2::new(15.0, 225.0));
        assert_eq!(aabb.max, Vec2::new(25.0, 375.0));
        assert_eq!(aabb.size(), Vec2::new(10.0, 150.0));
    }

    #[test]
    fn test_clamp_y() {
        let map = GameMap::new(800.0, 600.0);
        assert_eq!(map.clamp_y(10.0, 75.0), 75.0);
        assert_eq!(map.clamp_y(590.0, 75.0), 525.0);
        assert_eq!(map.clamp_y(300.0, 75.0), 300.0);
    }

    #[test]
    fn test_vertical_bounds() {
        let map = GameMap::new(800.0, 600.0);
        assert!(map.is_outside_vertically(4.0, 5.0));
        assert!(map.is_outside_vertically(596.0, 5.0));
        assert!(!map.is_outside_vertically(5.0, 5.0), "Touching the wall is in bounds");
        assert!(!map.is_outside_vertically(300.0, 5.0));
    }

    #[test]
    fn test_surface_reflection() {
        let map = GameMap::new(800.0, 600.0);
        assert_eq!(map.to_surface_y(0.0), 600.0);
        assert_eq!(map.to_surface_y(600.0), 0.0);
        assert_eq!(map.to_surface_y(100.0), 500.0);
    }

    #[test]
    fn test_spawns_are_centered() {
        let config = Config::default();
        let map = GameMap::from_config(&config);
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 300.0));
        assert_eq!(map.paddle_spawn(Side::Left, &config), Vec2::new(20.0, 300.0));
        assert_eq!(map.paddle_spawn(Side::Right, &config), Vec2::new(780.0, 300.0));
    }
}
