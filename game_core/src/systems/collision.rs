use hecs::World;
use std::f32::consts::PI;

use crate::{Ball, Config, Events, GameMap, Paddle, Side};

/// What happened to the ball during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallOutcome {
    /// Free flight, position advanced
    Moved,
    /// Advanced past the top or bottom wall and had its heading reflected
    WallBounce,
    /// Returned by this side's paddle; position was not advanced
    PaddleBounce(Side),
    /// Got past a paddle; carries the side that scored
    Scored(Side),
}

/// Advance the ball one frame against both paddles and the walls
///
/// The right paddle is checked before the left one and at most one of them
/// reacts per frame.
pub fn advance_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    dt: f32,
    map: &GameMap,
    config: &Config,
) -> BallOutcome {
    let vel = ball.velocity();
    let next = ball.next_position(dt);

    if next.x + ball.radius >= right.face_x() {
        if vel.x > 0.0 && right.spans(ball.pos.y) {
            ball.heading = PI + right.normalized_offset(ball.pos.y) * config.max_bounce_angle;
            ball.speed += config.ball_speed_increment;
            BallOutcome::PaddleBounce(Side::Right)
        } else {
            BallOutcome::Scored(Side::Left)
        }
    } else if next.x - ball.radius <= left.face_x() {
        if vel.x < 0.0 && left.spans(ball.pos.y) {
            ball.heading = -left.normalized_offset(ball.pos.y) * config.max_bounce_angle;
            ball.speed += config.ball_speed_increment;
            BallOutcome::PaddleBounce(Side::Left)
        } else {
            BallOutcome::Scored(Side::Right)
        }
    } else {
        ball.pos = next;
        // Position is left as is; only a ball still heading out gets reflected,
        // so a ball that stays past the wall for a frame does not flip back.
        let heading_out = (next.y - ball.radius < 0.0 && vel.y < 0.0)
            || (next.y + ball.radius > map.height && vel.y > 0.0);
        if map.is_outside_vertically(next.y, ball.radius) && heading_out {
            ball.heading = (-vel.y).atan2(vel.x);
            BallOutcome::WallBounce
        } else {
            BallOutcome::Moved
        }
    }
}

/// Check ball collisions with walls and paddles
///
/// Returns `None` when the world has no ball or is missing a paddle.
pub fn check_collisions(
    world: &mut World,
    dt: f32,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> Option<BallOutcome> {
    // Collect paddle data first so the ball can be borrowed mutably
    let left = find_paddle(world, Side::Left)?;
    let right = find_paddle(world, Side::Right)?;

    // Single ball
    let (_entity, ball) = world.query_mut::<&mut Ball>().into_iter().next()?;
    let outcome = advance_ball(ball, &left, &right, dt, map, config);

    match outcome {
        BallOutcome::PaddleBounce(side) => {
            events.ball_hit_paddle = true;
            log::debug!(
                "ball returned by {:?} paddle, heading {:.3} rad, speed {}",
                side,
                ball.heading,
                ball.speed
            );
        }
        BallOutcome::WallBounce => {
            events.ball_hit_wall = true;
            log::debug!("ball hit wall at y = {:.1}", ball.pos.y);
        }
        BallOutcome::Moved | BallOutcome::Scored(_) => {}
    }

    Some(outcome)
}

/// Copy of the paddle guarding `side`, if spawned
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}
