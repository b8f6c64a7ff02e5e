use hecs::World;

use crate::{Config, GameMap, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f32, map: &GameMap, config: &Config) {
    let step = config.paddle_speed * dt;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.is_idle() {
            continue;
        }
        // Up then down, each clamped on its own: holding both leaves down's result
        if intent.up {
            paddle.y = map.clamp_y(paddle.y + step, paddle.half_height());
        }
        if intent.down {
            paddle.y = map.clamp_y(paddle.y - step, paddle.half_height());
        }
    }
}
