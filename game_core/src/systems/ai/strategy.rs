use super::prediction::{height_after, time_to_cover};
use super::situation::Situation;
use crate::{GameRng, Params, Pitch};
use glam::Vec2;
use rand::Rng;

/// Play style re-rolled every few tenths of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Defensive,
    Aggressive,
    Neutral,
    Rush,
    Wait,
    Predictive,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Defensive,
        Pattern::Aggressive,
        Pattern::Neutral,
        Pattern::Rush,
        Pattern::Wait,
        Pattern::Predictive,
    ];

    /// Share of the predicted lead the generic chase follows
    pub fn lead(self) -> f32 {
        match self {
            Pattern::Aggressive | Pattern::Rush | Pattern::Predictive => 1.0,
            Pattern::Defensive | Pattern::Neutral | Pattern::Wait => 0.5,
        }
    }

    /// Pick a pattern different from `self`
    pub fn reroll(self, rng: &mut GameRng) -> Pattern {
        let others: Vec<Pattern> = Self::ALL.into_iter().filter(|p| *p != self).collect();
        others[rng.0.gen_range(0..others.len())]
    }
}

/// Where the AI wants to stand, in own-frame x, and how fast to get there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub ox: f32,
    pub speed: f32,
}

/// Pick the AI's target: defend own goal, cut off a fast ball, or chase
pub fn choose_target(
    s: &Situation,
    predicted: Vec2,
    pattern: Pattern,
    pitch: &Pitch,
    ai_speed: f32,
) -> Target {
    let center_y = pitch.goal_center_y();
    let in_band = |y: f32, margin: f32| y > pitch.goal_top - margin && y < pitch.goal_bottom + margin;
    let ball = &s.ball;

    let mut target = if s.defensive() {
        let line = s.goal_line_ox();
        let intercept_y = ball.pos.y + ball.vel.y * 8.0;
        let ox = if in_band(intercept_y, 20.0) {
            line - (intercept_y - center_y) * 0.3
        } else {
            line
        };
        Target {
            ox,
            speed: ai_speed * 1.9,
        }
    } else if s.fast_to_rival_goal
        || (s.ball_speed > 8.0 && s.ball_ovx > 3.0 && s.ball_ox > pitch.width / 2.0 - 200.0)
    {
        intercept(s, pitch, 20.0, 30.0, 0.5, ai_speed * 1.85)
    } else if s.moving_to_rival_goal
        || s.near_rival_goal
        || (s.ball_ovx > 2.0 && s.ball_ox > pitch.width - 350.0)
    {
        intercept(s, pitch, 25.0, 20.0, 0.4, ai_speed * 1.6)
    } else {
        let lead = pattern.lead();
        let chase_x = ball.pos.x + (predicted.x - ball.pos.x) * lead;
        let ox = if s.ball_dist < 50.0 {
            s.ball_ox
        } else {
            s.frame.x(chase_x)
        };
        Target {
            ox,
            speed: ai_speed * 1.5,
        }
    };

    if s.ball_dist < 25.0 && s.on_own_half {
        // Step around the ball so the next touch sends it away from the own goal
        target = Target {
            ox: s.ball_ox + 40.0,
            speed: ai_speed * 1.5,
        };
    }

    target
}

/// Cut the ball off in front of the rival goal, offset by its projected height
fn intercept(s: &Situation, pitch: &Pitch, inset: f32, margin: f32, tilt: f32, speed: f32) -> Target {
    let goal_ox = pitch.width - (Params::GOAL_DEPTH + inset);
    let t = time_to_cover(goal_ox - s.ball_ox, s.ball_ovx);
    let intercept_y = height_after(&s.ball, t);
    let in_band =
        intercept_y > pitch.goal_top - margin && intercept_y < pitch.goal_bottom + margin;
    let ox = if in_band {
        goal_ox - (intercept_y - pitch.goal_center_y()) * tilt
    } else {
        goal_ox
    };
    Target { ox, speed }
}

/// Own-frame horizontal velocity the AI wants this tick
///
/// Speed tapers in four steps as the target nears, so the AI settles instead
/// of oscillating around it.
pub fn steer(s: &Situation, target: Target) -> f32 {
    let diff = target.ox - s.me_ox;
    let dist = diff.abs();
    let to_ball = s.ball_ox - s.me_ox;
    let speed = target.speed;

    let mut desired = if dist > 25.0 {
        diff.signum() * speed
    } else if dist > 8.0 {
        diff.signum() * speed * 0.7
    } else if dist > 2.0 {
        diff.signum() * speed * 0.35
    } else if to_ball.abs() > 30.0 {
        to_ball.signum() * speed * 0.2
    } else {
        s.frame.vx(s.me.vel.x) * 0.95
    };

    // Never camp on the goal line while the ball is away upfield
    let at_goal_line = (s.me_ox - s.goal_line_ox()).abs() < 40.0;
    if at_goal_line && s.ball_ox > 250.0 && to_ball.abs() > 50.0 {
        desired = to_ball.signum() * speed * 0.4;
    }

    desired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Footballer, Side};

    fn view(ball: Ball) -> Situation {
        let pitch = Pitch::new();
        let me = Footballer::new(Side::Right, pitch.footballer_spawn(Side::Right));
        let rival = Footballer::new(Side::Left, pitch.footballer_spawn(Side::Left));
        Situation::new(me, rival, 0, ball, &pitch)
    }

    #[test]
    fn test_reroll_never_repeats() {
        let mut rng = GameRng::new(9);
        let mut pattern = Pattern::Neutral;
        for _ in 0..100 {
            let next = pattern.reroll(&mut rng);
            assert_ne!(next, pattern);
            pattern = next;
        }
    }

    #[test]
    fn test_defends_own_goal_when_ball_is_close() {
        let pitch = Pitch::new();
        let ball = Ball::new(Vec2::new(860.0, 300.0), Vec2::new(2.0, 0.0));
        let s = view(ball);
        let target = choose_target(&s, ball.pos, Pattern::Rush, &pitch, Params::AI_SPEED);
        assert!(target.ox < 120.0, "should hold the goal line, got {}", target.ox);
        assert!((target.speed - Params::AI_SPEED * 1.9).abs() < 1e-4);
    }

    #[test]
    fn test_patient_pattern_chases_between_ball_and_prediction() {
        let pitch = Pitch::new();
        let ball = Ball::new(Vec2::new(500.0, 200.0), Vec2::new(-1.0, 0.0));
        let s = view(ball);
        let predicted = Vec2::new(400.0, 200.0);

        let eager = choose_target(&s, predicted, Pattern::Predictive, &pitch, Params::AI_SPEED);
        let patient = choose_target(&s, predicted, Pattern::Wait, &pitch, Params::AI_SPEED);
        assert_eq!(eager.ox, s.frame.x(400.0));
        assert_eq!(patient.ox, s.frame.x(450.0));
    }

    #[test]
    fn test_steer_tapers_near_target() {
        let ball = Ball::new(Vec2::new(500.0, 200.0), Vec2::ZERO);
        let s = view(ball);
        let far = steer(&s, Target { ox: s.me_ox + 100.0, speed: 10.0 });
        let mid = steer(&s, Target { ox: s.me_ox + 10.0, speed: 10.0 });
        let near = steer(&s, Target { ox: s.me_ox + 5.0, speed: 10.0 });
        assert!((far - 10.0).abs() < 1e-4);
        assert!((mid - 7.0).abs() < 1e-4);
        assert!((near - 3.5).abs() < 1e-4);
    }

    #[test]
    fn test_fast_ball_upfield_is_cut_off_near_rival_goal() {
        let pitch = Pitch::new();
        // Right side: the ball runs toward the left goal at x = 300
        let fast = Ball::new(Vec2::new(300.0, 200.0), Vec2::new(-15.0, 0.0));
        let s = view(fast);
        assert!(s.fast_to_rival_goal && !s.defensive());

        let target = choose_target(&s, fast.pos, Pattern::Neutral, &pitch, Params::AI_SPEED);
        assert!((target.speed - Params::AI_SPEED * 1.85).abs() < 1e-4);
        let goal_ox = pitch.width - (Params::GOAL_DEPTH + 20.0);
        assert!((target.ox - goal_ox).abs() < 70.0, "intercept at {}", target.ox);

        let slow = Ball::new(Vec2::new(300.0, 200.0), Vec2::new(-1.0, 0.0));
        let chase = choose_target(&view(slow), slow.pos, Pattern::Neutral, &pitch, Params::AI_SPEED);
        assert!((chase.speed - Params::AI_SPEED * 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_steer_leaves_goal_line_when_ball_is_upfield() {
        let pitch = Pitch::new();
        let line_x = pitch.width - (Params::GOAL_DEPTH + Params::AI_GOAL_LINE_OFFSET);
        let me = Footballer::new(
            Side::Right,
            Vec2::new(line_x - Params::PLAYER_WIDTH / 2.0, pitch.ground_y - Params::PLAYER_HEIGHT),
        );
        let rival = Footballer::new(Side::Left, pitch.footballer_spawn(Side::Left));
        let ball = Ball::new(Vec2::new(400.0, 200.0), Vec2::ZERO);
        let s = Situation::new(me, rival, 0, ball, &pitch);

        // Already on target, so only the camping rule moves it
        let desired = steer(&s, Target { ox: s.me_ox, speed: 10.0 });
        assert!((desired - 4.0).abs() < 1e-4, "got {}", desired);

        let near = Ball::new(Vec2::new(line_x - 20.0, 200.0), Vec2::ZERO);
        let s = Situation::new(me, rival, 0, near, &pitch);
        assert!(steer(&s, Target { ox: s.me_ox, speed: 10.0 }).abs() < 1.0);
    }
}
