use std::collections::VecDeque;

use crate::{Ball, Footballer, Params};
use glam::Vec2;

/// Divide with the denominator's magnitude floored at `Params::MIN_DENOMINATOR`
pub fn safe_div(num: f32, den: f32) -> f32 {
    let den = if den.abs() < Params::MIN_DENOMINATOR {
        Params::MIN_DENOMINATOR.copysign(den)
    } else {
        den
    };
    num / den
}

/// Estimate where the ball will be when the AI reaches it
///
/// Blends the drift over the last three remembered positions with the current
/// velocity, projects forward by the time to cover the horizontal gap, and
/// leads further when the rival is running onto the ball.
pub fn predict_ball(memory: &VecDeque<Vec2>, ball: &Ball, me: &Footballer, rival: &Footballer) -> Vec2 {
    let n = memory.len();
    if n < 3 {
        return ball.pos;
    }

    let drift = memory[n - 1] - memory[n - 3];
    let avg = (drift + ball.vel) / 2.0;

    let dx = ball.pos.x - me.center().x;
    let t = safe_div(dx.abs(), avg.x.abs());
    // t is already in ticks, so friction compounds once per tick
    let friction = Params::BALL_FRICTION.powf(t);

    let mut predicted = Vec2::new(
        ball.pos.x + avg.x * t * friction,
        ball.pos.y + avg.y * t + Params::BALL_GRAVITY * t * t * 0.5,
    );

    if rival.vel != Vec2::ZERO {
        let to_ball = ball.pos - rival.center();
        if rival.vel.dot(to_ball) > 0.0 && to_ball.length() < 100.0 {
            predicted.x += rival.vel.x * 0.3;
        }
    }

    predicted
}

/// Time for the ball to travel `gap` at horizontal speed `vx`, never negative
pub fn time_to_cover(gap: f32, vx: f32) -> f32 {
    safe_div(gap, vx).max(0.0)
}

/// Ball height after `t` ticks of projectile flight
pub fn height_after(ball: &Ball, t: f32) -> f32 {
    ball.pos.y + ball.vel.y * t + Params::BALL_GRAVITY * t * t * 0.5
}
