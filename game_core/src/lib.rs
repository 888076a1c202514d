pub mod audio;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod match_state;
pub mod params;
pub mod pitch;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use audio::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use match_state::*;
pub use params::*;
pub use pitch::*;
pub use resources::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::{EntityBuilder, World};
use systems::AiBrain;

/// Who decides a footballer's moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven by `ControlIntent`, from the local keyboard or the relay
    Human,
    /// Driven by the opponent AI
    Ai,
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Helper to create a footballer entity with `pos` as its top-left corner
pub fn create_footballer(
    world: &mut World,
    side: Side,
    pos: Vec2,
    controller: Controller,
) -> hecs::Entity {
    let mut builder = EntityBuilder::new();
    builder.add(Footballer::new(side, pos));
    builder.add(Cooldowns::new());
    builder.add(StuckTimer::default());
    match controller {
        Controller::Human => builder.add(ControlIntent::new()),
        Controller::Ai => builder.add(AiBrain::new()),
    };
    world.spawn(builder.build())
}

/// Copy of the ball's current state
pub fn ball_of(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Write a ball state back to the ball entity
pub fn store_ball(world: &mut World, ball: Ball) {
    if let Some((_e, stored)) = world.query_mut::<&mut Ball>().into_iter().next() {
        *stored = ball;
    }
}

/// Copy of the footballer playing on `side`
pub fn footballer_of(world: &World, side: Side) -> Option<Footballer> {
    world
        .query::<&Footballer>()
        .iter()
        .map(|(_e, f)| *f)
        .find(|f| f.side == side)
}

/// Copy of the cooldowns of the footballer playing on `side`
pub fn cooldowns_of(world: &World, side: Side) -> Option<Cooldowns> {
    world
        .query::<(&Footballer, &Cooldowns)>()
        .iter()
        .find(|(_e, (f, _))| f.side == side)
        .map(|(_e, (_, c))| *c)
}
