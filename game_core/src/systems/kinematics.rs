use crate::{Ball, Events, Footballer, Params, Pitch};
use hecs::World;

/// Integrate the ball one tick: gravity, friction, then field bounces
pub fn move_ball(world: &mut World, pitch: &Pitch, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_pos = ball.pos;

        ball.vel.y += Params::BALL_GRAVITY;
        ball.vel *= Params::BALL_FRICTION;
        ball.pos += ball.vel;

        if bounce_off_bounds(ball, pitch) {
            events.wall_hit = true;
        }

        if ball.super_shot && ball.speed() < Params::SUPER_SHOT_FADE_SPEED {
            ball.super_shot = false;
        }
    }
}

/// Reflect the ball off the ground, ceiling and side walls; returns true on any contact
pub fn bounce_off_bounds(ball: &mut Ball, pitch: &Pitch) -> bool {
    let r = ball.radius;
    let mut hit = false;

    if ball.pos.y + r >= pitch.ground_y {
        ball.pos.y = pitch.ground_y - r;
        ball.vel.y *= -Params::BALL_BOUNCE;
        ball.vel.x *= Params::BALL_ROLL_DAMPING;
    }
    if ball.pos.y - r <= pitch.ceiling_y {
        ball.pos.y = pitch.ceiling_y + r;
        ball.vel.y *= -Params::BALL_BOUNCE;
        hit = true;
    }
    if ball.pos.x - r <= 0.0 {
        ball.pos.x = r;
        ball.vel.x = wall_rebound(ball.vel.x, 1.0);
        hit = true;
    }
    if ball.pos.x + r >= pitch.width {
        ball.pos.x = pitch.width - r;
        ball.vel.x = wall_rebound(ball.vel.x, -1.0);
        hit = true;
    }

    hit
}

/// Rebound velocity off a side wall whose inward normal has sign `away`
fn wall_rebound(vx: f32, away: f32) -> f32 {
    let rebound = -vx * Params::BALL_BOUNCE;
    if rebound.abs() < Params::WALL_MIN_REBOUND {
        away * Params::WALL_MIN_REBOUND
    } else {
        rebound
    }
}

/// Advance a footballer one tick towards `target_vx`
///
/// `jump` is the upward impulse to apply, used only when grounded.
pub fn move_footballer(
    footballer: &mut Footballer,
    target_vx: f32,
    smoothing: f32,
    jump: Option<f32>,
    pitch: &Pitch,
) {
    footballer.vel.x += (target_vx - footballer.vel.x) * smoothing;

    if let Some(impulse) = jump {
        if footballer.on_ground(pitch.ground_y) {
            footballer.vel.y = impulse;
        }
    }
    footballer.vel.y += Params::PLAYER_GRAVITY;
    footballer.pos += footballer.vel;

    if footballer.pos.y + footballer.size.y >= pitch.ground_y {
        footballer.pos.y = pitch.ground_y - footballer.size.y;
        footballer.vel.y = 0.0;
    }
    footballer.pos.x = pitch.clamp_footballer_x(footballer.pos.x, footballer.size.x);
}
