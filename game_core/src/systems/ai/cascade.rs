use super::situation::Situation;
use crate::systems::control::power_kick_velocity;
use crate::{Ball, Config, Cooldowns, Events, Footballer, GameRng, Params, Pitch, Side};
use glam::Vec2;
use log::trace;
use rand::Rng;

/// Discrete actions the AI can take on the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Head the ball up and away from the own goal
    DefensiveClear,
    PowerKick,
    AttackHead,
    Kick,
}

/// What the AI can physically reach this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Reach {
    pub near_head: bool,
    pub power_kick: bool,
    pub kick: bool,
}

impl Reach {
    pub fn new(me: &Footballer, cooldowns: &Cooldowns, ball: &Ball) -> Self {
        Self {
            near_head: me.near_head(ball),
            power_kick: cooldowns.power_kick == 0 && me.in_range(ball, Params::POWER_KICK_RANGE),
            kick: me.in_range(ball, Params::TACKLE_RANGE),
        }
    }
}

struct Rule {
    action: AiAction,
    applies: fn(&Situation, &Reach) -> bool,
}

fn clears(s: &Situation, reach: &Reach) -> bool {
    s.defensive() && reach.near_head
}

fn power_kicks(s: &Situation, reach: &Reach) -> bool {
    !s.defensive() && reach.power_kick
}

fn attack_heads(s: &Situation, reach: &Reach) -> bool {
    !s.defensive() && reach.near_head
}

fn kicks(s: &Situation, reach: &Reach) -> bool {
    !s.defensive() && reach.kick
}

/// Evaluated top to bottom; the first rule that applies is the only one tried.
///
/// Inside the defensive zone every attacking rule is switched off, leaving the
/// clearance as the sole option.
const RULES: [Rule; 4] = [
    Rule {
        action: AiAction::DefensiveClear,
        applies: clears,
    },
    Rule {
        action: AiAction::PowerKick,
        applies: power_kicks,
    },
    Rule {
        action: AiAction::AttackHead,
        applies: attack_heads,
    },
    Rule {
        action: AiAction::Kick,
        applies: kicks,
    },
];

/// First applicable action, before the success roll
pub fn choose_action(s: &Situation, reach: &Reach) -> Option<AiAction> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(s, reach))
        .map(|rule| rule.action)
}

/// Probability the chosen action is carried out, tuned near certain
pub fn success_chance(action: AiAction, s: &Situation, rng: &mut GameRng) -> f32 {
    let w = s.frame.width;
    let upfield = s.ball_ox > 200.0;
    let in_band = s.ball.pos.y > Params::GOAL_TOP - 50.0 && s.ball.pos.y < Params::GOAL_BOTTOM + 50.0;
    let deep_attack = s.ball_ox > w - 450.0 && !s.on_own_half;

    match action {
        AiAction::DefensiveClear => 1.0,
        AiAction::PowerKick => {
            if s.on_own_half && s.rival_dist > 100.0 && upfield {
                0.99 + rng.0.gen::<f32>() * 0.01
            } else if deep_attack && in_band {
                1.0
            } else if s.rival_dist > 90.0 && upfield {
                0.99
            } else if s.moving_to_rival_goal && s.ball_ox > w - 300.0 {
                0.85
            } else {
                0.98 + rng.0.gen::<f32>() * 0.02
            }
        }
        AiAction::AttackHead => {
            if s.moving_to_rival_goal || s.near_rival_goal {
                0.99 + rng.0.gen::<f32>() * 0.01
            } else if s.on_own_half && s.rival_dist > 80.0 && upfield {
                0.99
            } else {
                0.98 + rng.0.gen::<f32>() * 0.02
            }
        }
        AiAction::Kick => {
            if deep_attack {
                0.98 + rng.0.gen::<f32>() * 0.02
            } else if s.on_own_half && s.rival_dist > 80.0 && upfield {
                0.97 + rng.0.gen::<f32>() * 0.03
            } else if s.moving_to_rival_goal && s.ball_ox > w - 300.0 {
                0.85
            } else {
                0.95 + rng.0.gen::<f32>() * 0.05
            }
        }
    }
}

/// True when a horizontal velocity would carry the ball towards `side`'s own goal
pub fn points_at_own_goal(vx: f32, side: Side) -> bool {
    vx * side.attack_dir() < 0.0
}

/// Unit aim from `from` at `target`, with the horizontal part forced towards the rival goal
fn forced_aim(from: Vec2, target: Vec2, side: Side) -> Vec2 {
    let mut aim = (target - from).normalize_or_zero();
    aim.x = aim.x.abs() * side.attack_dir();
    aim
}

/// Roll for and carry out the first applicable action; returns the action taken
#[allow(clippy::too_many_arguments)]
pub fn act(
    s: &Situation,
    me: &Footballer,
    cooldowns: &mut Cooldowns,
    ball: &mut Ball,
    pitch: &Pitch,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<AiAction> {
    let reach = Reach::new(me, cooldowns, ball);
    let action = choose_action(s, &reach)?;
    let roll: f32 = rng.0.gen();
    if roll >= success_chance(action, s, rng) {
        return None;
    }

    let side = me.side;
    let dir = side.attack_dir();
    let goal = pitch.goal_target(side.opponent());

    match action {
        AiAction::DefensiveClear => {
            cooldowns.action = Params::AI_ACTION_COOLDOWN;
            // Drop any pace towards the own goal before clearing
            let outward = s.frame.vx(ball.vel.x).max(0.0);
            ball.vel.y = Params::HEADING_FORCE * 0.9;
            ball.vel.x = (outward + Params::HEADING_H_FORCE * 0.8) * dir;
            events.header = true;
        }
        AiAction::PowerKick => {
            cooldowns.power_kick = config.power_kick_cooldown;
            cooldowns.action = Params::AI_ACTION_COOLDOWN;
            ball.vel = power_kick_velocity(ball.pos, goal, rng);
            if points_at_own_goal(ball.vel.x, side) {
                let aim = forced_aim(ball.pos, goal, side);
                ball.vel = aim * Params::POWER_KICK_FORCE * 0.95
                    - Vec2::new(0.0, Params::POWER_KICK_LIFT);
            }
            ball.super_shot = true;
            events.power_kick = true;
        }
        AiAction::AttackHead => {
            cooldowns.action = Params::AI_ACTION_COOLDOWN;
            if s.on_own_half {
                ball.vel.y = Params::HEADING_FORCE;
                ball.vel.x += Params::HEADING_H_FORCE * 0.95 * dir;
            } else {
                let aim = (goal - ball.pos).normalize_or_zero();
                ball.vel.y = Params::HEADING_FORCE * (1.0 + rng.0.gen::<f32>() * 0.1);
                ball.vel.x += Params::HEADING_H_FORCE * aim.x * (0.9 + rng.0.gen::<f32>() * 0.1);
            }
            if points_at_own_goal(ball.vel.x, side) {
                ball.vel = Vec2::new(Params::HEADING_H_FORCE * 0.95 * dir, Params::HEADING_FORCE);
            }
            events.header = true;
        }
        AiAction::Kick => {
            cooldowns.action = Params::AI_ACTION_COOLDOWN
                + rng.0.gen_range(0..=Params::AI_KICK_EXTRA_COOLDOWN);
            let power = 0.85 + rng.0.gen::<f32>() * 0.1;
            let aim = (goal - ball.pos).normalize_or_zero();
            ball.vel = Vec2::new(
                Params::SHOT_FORCE * aim.x * power,
                -Params::SHOT_FORCE * 0.4 * power,
            );
            if points_at_own_goal(ball.vel.x, side) {
                let aim = forced_aim(ball.pos, goal, side);
                ball.vel.x = Params::SHOT_FORCE * aim.x * power;
            }
            events.tackle = true;
        }
    }

    trace!("{:?} AI {:?}, ball velocity {:?}", side, action, ball.vel);
    Some(action)
}
