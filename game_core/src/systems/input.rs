use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy the held controls of each paddle into its intent
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let (up, down) = Control::for_side(paddle.side);
        intent.up = input.is_pressed(up);
        intent.down = input.is_pressed(down);
    }
}
