use hecs::World;

use crate::{Ball, Cooldowns, Footballer, Pitch, StuckTimer};

/// Snap the ball and both footballers back to their kick-off state
///
/// Idempotent: calling it any number of times yields the same spawn state.
pub fn reset_to_spawn(world: &mut World, pitch: &Pitch) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(pitch.ball_spawn());
    }

    for (_entity, (footballer, cooldowns, stuck)) in
        world.query_mut::<(&mut Footballer, &mut Cooldowns, &mut StuckTimer)>()
    {
        footballer.reset(pitch.footballer_spawn(footballer.side));
        cooldowns.bound = 0;
        stuck.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_footballer, Controller, Side};
    use glam::Vec2;

    fn positions(world: &World) -> (Ball, Vec<Footballer>) {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball");
        let mut footballers: Vec<Footballer> =
            world.query::<&Footballer>().iter().map(|(_e, f)| *f).collect();
        footballers.sort_by_key(|f| f.side);
        (ball, footballers)
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut world = World::new();
        let pitch = Pitch::new();
        create_ball(&mut world, Vec2::new(40.0, 300.0), Vec2::new(-9.0, 3.0));
        let left = create_footballer(&mut world, Side::Left, Vec2::new(300.0, 250.0), Controller::Human);
        create_footballer(&mut world, Side::Right, Vec2::new(500.0, 368.0), Controller::Ai);
        world.get::<&mut Cooldowns>(left).expect("cd").bound = 40;

        reset_to_spawn(&mut world, &pitch);
        let first = positions(&world);
        reset_to_spawn(&mut world, &pitch);
        reset_to_spawn(&mut world, &pitch);
        let third = positions(&world);

        assert_eq!(first, third);
        assert_eq!(first.0.pos, pitch.ball_spawn());
        assert_eq!(first.0.vel, Vec2::ZERO);
        assert_eq!(first.1[0].pos, pitch.footballer_spawn(Side::Left));
        assert_eq!(first.1[1].pos, pitch.footballer_spawn(Side::Right));
        assert_eq!(world.get::<&Cooldowns>(left).expect("cd").bound, 0);
    }
}
