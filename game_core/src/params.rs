use std::f32::consts::PI;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_INSET: f32 = 20.0; // Side wall to paddle center
    pub const PADDLE_SPEED: f32 = 300.0; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_INITIAL: f32 = 200.0;
    pub const BALL_SPEED_INCREMENT: f32 = 10.0; // Added on every paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = 75.0 * PI / 180.0;

    // Time
    pub const MAX_FRAME_DELTA: f64 = 0.3; // Longer gaps are treated as a stall
}
