use super::situation::Situation;
use crate::{Config, Pitch};

/// Jump strength as a fraction of a full jump, or None to stay grounded
///
/// Every condition is checked; the last one that holds sets the strength.
pub fn jump_strength(s: &Situation, pitch: &Pitch, config: &Config) -> Option<f32> {
    if !s.me.on_ground(pitch.ground_y) {
        return None;
    }

    let ball = &s.ball;
    let top = s.me.pos.y;
    let dx = s.ball_dx().abs();
    let rival_gap = (s.rival.center().x - s.me.center().x).abs();
    let rival_goal_ox = pitch.width - (pitch.goal_depth + 25.0);

    let rules: [(bool, f32); 9] = [
        // Fast ball towards the rival goal
        (s.fast_to_rival_goal && ball.pos.y < top + 70.0 && (ball.pos.x - s.me.center().x).abs() < 180.0, 1.0),
        // Ball overhead
        (ball.pos.y < top - 5.0 && dx < 160.0, 1.0),
        // Ball dropping in
        (ball.vel.y > 1.0 && dx < 140.0 && ball.pos.y < top + 80.0, 0.98),
        // Rival jumping for a header near the ball
        (s.rival.vel.y < -4.0 && rival_gap < 180.0 && ball.pos.y < top + 60.0, 1.0),
        // Ball heading for the rival goal at height
        (
            (s.moving_to_rival_goal || s.near_rival_goal || s.fast_to_rival_goal)
                && ball.pos.y < top + 50.0
                && (s.ball_ox - rival_goal_ox).abs() < 140.0,
            1.0,
        ),
        // Ball rising over the rival crossbar
        (s.ball_ox > pitch.width - 300.0 && ball.pos.y < pitch.goal_top + 50.0 && ball.vel.y < 0.0, 1.0),
        // Ball converging on the own goal at height
        (s.moving_to_own_goal && s.ball_ox < 300.0 && ball.pos.y < top + 50.0, 1.0),
        // Rival just fired a power kick
        (
            s.rival_power_kick == config.power_kick_cooldown.saturating_sub(1) && rival_gap < 200.0,
            0.95,
        ),
        // Fast ball coming through the middle
        (s.ball_speed > 7.0 && s.in_center && s.ball_ovx > 2.0 && dx < 190.0, 1.0),
    ];

    rules
        .iter()
        .filter(|(holds, _)| *holds)
        .map(|(_, strength)| *strength)
        .last()
}
