pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use render::{Color, RenderCommand};
pub use resources::*;

use hecs::World;
use systems::*;

/// Everything the simulation owns between frames
pub struct GameState {
    pub world: World,
    pub clock: Clock,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
}

impl GameState {
    /// Build a fresh match: paddles centered, ball served toward the right
    pub fn new(config: Config, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::from_config(&config);
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, &map, &config);
        create_paddle(&mut world, Side::Right, &map, &config);
        create_ball(
            &mut world,
            Ball::new(
                map.ball_spawn(),
                config.ball_radius,
                config.ball_speed_initial,
                Side::Right.heading_toward(),
            ),
        );

        Ok(Self {
            world,
            clock: Clock::with_max_delta(now, config.max_frame_delta),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
        })
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        find_paddle(&self.world, side)
    }
}

/// Output of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<RenderCommand>,
    pub score: Score,
    pub events: Events,
}

impl Frame {
    pub fn score_text(&self) -> [String; 2] {
        render::score_text(&self.score)
    }
}

/// Run one animation frame of the simulation
///
/// `now` is a wall-clock sample in seconds and `input` the control snapshot
/// taken for this frame. The ball and paddles are drawn after the paddles move
/// but before the ball does.
pub fn step(state: &mut GameState, input: &InputState, now: f64) -> Frame {
    state.clock.advance(now);
    let dt = state.clock.delta();
    if state.clock.is_stalled() {
        log::debug!(
            "dropping {:.3}s frame gap, simulation holds still",
            state.clock.raw_delta()
        );
    }

    // Clear events at start of frame
    state.events.clear();

    let mut commands = Vec::with_capacity(5);
    render::draw_background(&state.map, &mut commands);

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(&mut state.world, input);

    // 2. Move paddles based on intents
    move_paddles(&mut state.world, dt, &state.map, &state.config);

    // 3. Draw ball and paddles where they stand now
    if let Some(ball) = state.ball() {
        commands.push(render::draw_ball(&ball, &state.map));
    }
    for side in [Side::Right, Side::Left] {
        if let Some(paddle) = state.paddle(side) {
            commands.push(render::draw_paddle(&paddle, &state.map));
        }
    }

    // 4. Move ball, bouncing off paddles and walls
    let outcome = check_collisions(
        &mut state.world,
        dt,
        &state.map,
        &state.config,
        &mut state.events,
    );

    // 5. Scoring resets the rally
    if let Some(BallOutcome::Scored(scorer)) = outcome {
        award_point(
            &mut state.world,
            &state.map,
            &state.config,
            &mut state.score,
            &mut state.events,
            scorer,
        );
    }

    Frame {
        commands,
        score: state.score,
        events: state.events.clone(),
    }
}

/// Helper to create a paddle entity at its resting position
pub fn create_paddle(
    world: &mut World,
    side: Side,
    map: &GameMap,
    config: &Config,
) -> hecs::Entity {
    let spawn = map.paddle_spawn(side, config);
    let paddle = Paddle::new(
        side,
        spawn.x,
        spawn.y,
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
