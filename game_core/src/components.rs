use glam::Vec2;
use std::f32::consts::PI;

use crate::map::Aabb;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Heading of a ball travelling toward this side
    pub fn heading_toward(self) -> f32 {
        match self {
            Side::Left => PI,
            Side::Right => 0.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Center X (fixed)
    pub y: f32, // Center Y (clamped to court)
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// X of the edge facing the court
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width / 2.0,
            Side::Right => self.x - self.width / 2.0,
        }
    }

    /// Whether `y` lies within the paddle's vertical span (inclusive)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y - self.half_height() && y <= self.y + self.half_height()
    }

    /// Signed distance of a hit from the paddle center, scaled so the ends are +/-1.
    /// Positive when the hit is below center.
    pub fn normalized_offset(&self, y: f32) -> f32 {
        (self.y - y) / self.half_height()
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - the pong ball
///
/// Motion is stored as a speed and a heading; the velocity vector is always
/// derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub heading: f32, // Radians from +X, counter-clockwise
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32, heading: f32) -> Self {
        Self {
            pos,
            radius,
            speed,
            heading,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin()) * self.speed
    }

    /// Where the ball would be after `dt` seconds of free flight
    pub fn next_position(&self, dt: f32) -> Vec2 {
        self.pos + self.velocity() * dt
    }

    /// Serve from `pos` at `speed` along `heading`
    pub fn reset(&mut self, pos: Vec2, speed: f32, heading: f32) {
        self.pos = pos;
        self.speed = speed;
        self.heading = heading;
    }
}

/// Movement intent for paddle, sampled from the held controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        !self.up && !self.down
    }
}
