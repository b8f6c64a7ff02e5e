//! Draw commands for a 2D surface with a top-left origin
//!
//! Court coordinates point Y up; every command here is already flipped into
//! surface coordinates, so a host only has to replay them.

use crate::{Ball, GameMap, Paddle, Score, Side};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#ffffff`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const BALL_COLOR: Color = Color::WHITE;
pub const PADDLE_COLOR: Color = Color::WHITE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Wipe the whole surface
    Clear { width: f32, height: f32 },
    /// Rectangle given by its top-left corner
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
}

/// Clear the surface and paint the court background
pub fn draw_background(map: &GameMap, out: &mut Vec<RenderCommand>) {
    out.push(RenderCommand::Clear {
        width: map.width,
        height: map.height,
    });
    out.push(RenderCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: map.width,
        height: map.height,
        color: BACKGROUND_COLOR,
    });
}

pub fn draw_ball(ball: &Ball, map: &GameMap) -> RenderCommand {
    RenderCommand::FillCircle {
        x: ball.pos.x,
        y: map.to_surface_y(ball.pos.y),
        radius: ball.radius,
        color: BALL_COLOR,
    }
}

pub fn draw_paddle(paddle: &Paddle, map: &GameMap) -> RenderCommand {
    let rect = paddle.rect();
    let size = rect.size();
    RenderCommand::FillRect {
        x: rect.min.x,
        // The top edge in court space becomes the surface-space origin of the rect
        y: map.to_surface_y(rect.max.y),
        width: size.x,
        height: size.y,
        color: PADDLE_COLOR,
    }
}

/// Scoreboard line for one player
pub fn score_line(score: &Score, side: Side) -> String {
    let player = match side {
        Side::Left => 1,
        Side::Right => 2,
    };
    format!("Player {}: {}", player, score.get(side))
}

/// Both scoreboard lines, player 1 first
pub fn score_text(score: &Score) -> [String; 2] {
    [score_line(score, Side::Left), score_line(score, Side::Right)]
}
