use hecs::World;

use crate::{Ball, Config, Events, GameMap, Paddle, Score, Side};

/// Credit `scorer` with a point and start the next rally
pub fn award_point(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    scorer: Side,
) {
    score.increment(scorer);
    events.scored(scorer);
    log::info!(
        "{:?} scores, Player 1: {} Player 2: {}",
        scorer,
        score.left,
        score.right
    );

    // Serve toward the side that just conceded
    reset_rally(world, map, config, scorer.opponent());
}

/// Re-center the ball at initial speed and bring both paddles back to mid court
pub fn reset_rally(world: &mut World, map: &GameMap, config: &Config, serve_toward: Side) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(
            map.ball_spawn(),
            config.ball_speed_initial,
            serve_toward.heading_toward(),
        );
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = map.paddle_spawn(paddle.side, config).y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, find_paddle};
    use glam::Vec2;
    use std::f32::consts::PI;

    fn setup_world() -> (World, Config, GameMap, Score, Events) {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &map, &config);
        create_paddle(&mut world, Side::Right, &map, &config);
        (world, config, map, Score::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    fn scatter(world: &mut World) {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = match paddle.side {
                Side::Left => 100.0,
                Side::Right => 525.0,
            };
        }
    }

    #[test]
    fn test_left_player_scores() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(&mut world, Ball::new(Vec2::new(790.0, 300.0), 5.0, 260.0, 0.3));

        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Left);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
        assert!(!events.right_scored);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, map.center(), "Ball should reset to center");
        assert_eq!(ball.heading, 0.0, "Serve goes toward the player who conceded");
        assert_eq!(ball.speed, config.ball_speed_initial);
    }

    #[test]
    fn test_right_player_scores() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(&mut world, Ball::new(Vec2::new(10.0, 300.0), 5.0, 230.0, PI));

        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Right);

        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
        assert!(events.right_scored);
        assert_eq!(ball_of(&world).heading, PI);
    }

    #[test]
    fn test_paddles_recenter_after_point() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(&mut world, Ball::new(Vec2::new(10.0, 300.0), 5.0, 230.0, PI));
        scatter(&mut world);

        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Right);

        for side in [Side::Left, Side::Right] {
            let paddle = find_paddle(&world, side).unwrap();
            assert_eq!(paddle.y, map.height / 2.0, "{side:?} paddle should recenter");
            assert_eq!(paddle.x, config.paddle_x(side), "Paddle X never changes");
        }
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(&mut world, Ball::new(map.center(), 5.0, 200.0, 0.0));

        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Left);
        events.clear();
        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Left);
        events.clear();
        award_point(&mut world, &map, &config, &mut score, &mut events, Side::Right);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 1);
    }
}
