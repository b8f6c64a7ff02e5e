use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle height {paddle} exceeds court height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },

    #[error("ball diameter {diameter} does not fit in court height {court}")]
    BallTooLarge { diameter: f32, court: f32 },

    #[error("paddles are {gap} apart, the ball needs more than {diameter}")]
    PaddlesTooClose { gap: f32, diameter: f32 },

    #[error("max bounce angle must be strictly between 0 and pi/2 radians, got {0}")]
    BounceAngle(f32),

    #[error("max frame delta must be a positive number of seconds, got {0}")]
    FrameDelta(f64),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
