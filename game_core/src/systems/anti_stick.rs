use crate::{ball_of, store_ball, Events, Footballer, GameRng, Params, StuckTimer};
use glam::Vec2;
use hecs::World;
use log::trace;
use rand::Rng;
use std::f32::consts::TAU;

/// Launch the ball if it has dwelt motionless against a footballer too long
///
/// Each footballer keeps its own dwell counter.
pub fn release_stuck_ball(world: &mut World, events: &mut Events, rng: &mut GameRng) {
    let Some(mut ball) = ball_of(world) else {
        return;
    };

    let mut stuck: Vec<_> = world
        .query_mut::<(&Footballer, &mut StuckTimer)>()
        .into_iter()
        .collect();
    stuck.sort_by_key(|(_e, (f, _))| f.side);

    let mut launched = false;
    for (_entity, (footballer, timer)) in stuck {
        let close = ball.pos.distance(footballer.center()) < Params::STUCK_RADIUS;
        if !(close && ball.speed() < Params::STUCK_SPEED) {
            timer.ticks = 0;
            continue;
        }

        timer.ticks += 1;
        if timer.ticks >= Params::STUCK_TICKS {
            let angle = rng.0.gen_range(0.0..TAU);
            let force = rng.0.gen_range(Params::STUCK_FORCE_MIN..Params::STUCK_FORCE_MAX);
            ball.vel = Vec2::new(angle.cos() * force, angle.sin() * force - 2.0);
            timer.ticks = 0;
            launched = true;
            trace!("{:?} anti-stick launch {:?}", footballer.side, ball.vel);
        }
    }

    if launched {
        events.anti_stick = true;
        store_ball(world, ball);
    }
}
