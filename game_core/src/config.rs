use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] value when missing from JSON, so a
/// host can override only what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub max_frame_delta: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            max_frame_delta: Params::MAX_FRAME_DELTA,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Get X position of a paddle center
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.court_width - self.paddle_inset,
        }
    }

    /// Check that the court can actually be played on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("court_width", self.court_width)?;
        positive("court_height", self.court_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed_initial", self.ball_speed_initial)?;

        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            return Err(ConfigError::Negative {
                field: "paddle_inset",
                value: self.paddle_inset,
            });
        }
        if !self.ball_speed_increment.is_finite() || self.ball_speed_increment < 0.0 {
            return Err(ConfigError::Negative {
                field: "ball_speed_increment",
                value: self.ball_speed_increment,
            });
        }

        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter > self.court_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                court: self.court_height,
            });
        }

        // Inner faces of the two paddles
        let gap = self.paddle_x(Side::Right)
            - self.paddle_x(Side::Left)
            - self.paddle_width;
        if gap <= diameter {
            return Err(ConfigError::PaddlesTooClose { gap, diameter });
        }

        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < FRAC_PI_2) {
            return Err(ConfigError::BounceAngle(self.max_bounce_angle));
        }

        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(ConfigError::FrameDelta(self.max_frame_delta));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 780.0, "Right paddle X position");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{ "ball_speed_initial": 250.0 }"#).unwrap();
        assert_eq!(config.ball_speed_initial, 250.0);
        assert_eq!(config.court_width, Params::COURT_WIDTH);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_paddle_taller_than_court() {
        let config = Config {
            paddle_height: 700.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = Config {
            court_width: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "court_width",
                ..
            })
        ));

        let config = Config {
            ball_radius: f32::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err(), "NaN radius must be rejected");
    }

    #[test]
    fn test_rejects_paddles_without_room_for_ball() {
        let config = Config {
            court_width: 50.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddlesTooClose { .. })
        ));
    }

    #[test]
    fn test_rejects_right_angle_bounce() {
        let config = Config {
            max_bounce_angle: FRAC_PI_2,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BounceAngle(_))
        ));
    }
}
