use crate::systems::kinematics::move_footballer;
use crate::{
    ball_of, store_ball, Ball, Config, ControlIntent, Cooldowns, Events, Footballer, GameRng,
    Params, Pitch, Side,
};
use glam::Vec2;
use hecs::World;
use log::debug;
use rand::Rng;

/// Move a human-driven footballer and fire whatever actions its intent allows
///
/// Does nothing when `side` is not human-driven.
pub fn drive_human(
    world: &mut World,
    side: Side,
    pitch: &Pitch,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let Some(mut ball) = ball_of(world) else {
        return;
    };

    let mut touched = false;
    for (_entity, (footballer, intent, cooldowns)) in
        world.query_mut::<(&mut Footballer, &mut ControlIntent, &mut Cooldowns)>()
    {
        if footballer.side != side {
            continue;
        }

        if cooldowns.is_bound() {
            footballer.vel = Vec2::ZERO;
            continue;
        }

        let jump = intent
            .buttons
            .jump
            .then_some(Params::PLAYER_JUMP);
        move_footballer(
            footballer,
            intent.target_vx(config.player_speed),
            Params::PLAYER_SMOOTHING,
            jump,
            pitch,
        );

        touched = apply_actions(
            footballer, intent, cooldowns, &mut ball, pitch, config, events, rng,
        );
    }

    if touched {
        store_ball(world, ball);
    }
}

/// Heading, power kick and tackle, in that order; returns true if the ball was struck
#[allow(clippy::too_many_arguments)]
fn apply_actions(
    footballer: &Footballer,
    intent: &mut ControlIntent,
    cooldowns: &mut Cooldowns,
    ball: &mut Ball,
    pitch: &Pitch,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let mut touched = false;

    if intent.heading_armed() && footballer.near_head(ball) {
        intent.latch_heading();
        ball.vel.y = Params::HEADING_FORCE;
        ball.vel.x += Params::HEADING_H_FORCE * intent.facing(footballer.side);
        events.header = true;
        touched = true;
    }

    if intent.buttons.power_kick
        && cooldowns.power_kick == 0
        && footballer.in_range(ball, Params::POWER_KICK_RANGE)
    {
        cooldowns.power_kick = config.power_kick_cooldown;
        let target = pitch.goal_target(footballer.side.opponent());
        ball.vel = power_kick_velocity(ball.pos, target, rng);
        ball.super_shot = true;
        events.power_kick = true;
        touched = true;
        debug!("{:?} power kick, ball velocity {:?}", footballer.side, ball.vel);
    }

    if intent.tackle_armed() && footballer.in_range(ball, Params::TACKLE_RANGE) {
        intent.latch_tackle();
        let dx = ball.pos.x - footballer.center().x;
        let dir = if dx > 0.0 { 1.0 } else { -1.0 };
        ball.vel.x += dir * Params::SHOT_FORCE * Params::TACKLE_SCALE;
        ball.vel.y -= Params::TACKLE_LIFT;
        events.tackle = true;
        touched = true;
    }

    touched
}

/// Full-strength shot from `from` at `target` with per-axis jitter and a slight lift
pub fn power_kick_velocity(from: Vec2, target: Vec2, rng: &mut GameRng) -> Vec2 {
    let aim = (target - from).normalize_or_zero();
    let jx = rng.0.gen_range(Params::POWER_KICK_JITTER_MIN..=1.0);
    let jy = rng.0.gen_range(Params::POWER_KICK_JITTER_MIN..=1.0);
    Vec2::new(
        Params::POWER_KICK_FORCE * aim.x * jx,
        Params::POWER_KICK_FORCE * aim.y * jy - Params::POWER_KICK_LIFT,
    )
}
